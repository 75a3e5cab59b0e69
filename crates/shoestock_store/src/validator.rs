//! Record validation.

use std::collections::HashSet;

use regex::Regex;

use crate::models::Shoe;

/// Validation result with details.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn add_error(&mut self, message: impl Into<String>) {
        self.valid = false;
        self.errors.push(message.into());
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn merge(&mut self, other: ValidationResult) {
        if !other.valid {
            self.valid = false;
        }
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

/// Validator for shoe records.
pub struct ShoeValidator;

impl ShoeValidator {
    /// True if `code` matches the `SKU<digits>` format.
    pub fn is_valid_code(code: &str) -> bool {
        Regex::new(r"^SKU\d+$")
            .map(|re| re.is_match(code))
            .unwrap_or(false)
    }

    /// True if `name` is non-empty and contains only letters and spaces.
    ///
    /// Used for both country and product fields.
    pub fn is_valid_name(name: &str) -> bool {
        !name.trim().is_empty() && name.chars().all(|c| c.is_alphabetic() || c == ' ')
    }

    /// Validate a single record.
    pub fn validate_shoe(shoe: &Shoe) -> ValidationResult {
        let mut result = ValidationResult::new();

        if !Self::is_valid_name(&shoe.country) {
            result.add_error(format!(
                "Invalid country '{}': only letters and spaces allowed",
                shoe.country
            ));
        }

        if !Self::is_valid_name(&shoe.product) {
            result.add_error(format!(
                "Invalid product '{}': only letters and spaces allowed",
                shoe.product
            ));
        }

        if !Self::is_valid_code(&shoe.code) {
            result.add_error(format!(
                "Invalid code '{}': expected SKU followed by digits",
                shoe.code
            ));
        }

        if !shoe.cost.is_finite() || shoe.cost < 0.0 {
            result.add_error(format!(
                "Invalid cost '{}': must be a non-negative amount",
                shoe.cost
            ));
        }

        result
    }

    /// Validate a whole inventory: every record, plus duplicate-code
    /// detection across records.
    pub fn validate_inventory(shoes: &[Shoe]) -> ValidationResult {
        let mut result = ValidationResult::new();

        for shoe in shoes {
            result.merge(Self::validate_shoe(shoe));
        }

        let mut seen = HashSet::new();
        for shoe in shoes {
            if !seen.insert(shoe.code.as_str()) {
                result.add_warning(format!("Duplicate code: {}", shoe.code));
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_format() {
        assert!(ShoeValidator::is_valid_code("SKU123"));
        assert!(ShoeValidator::is_valid_code("SKU0"));
        assert!(!ShoeValidator::is_valid_code("sku123"));
        assert!(!ShoeValidator::is_valid_code("ABC123"));
        assert!(!ShoeValidator::is_valid_code("SKU"));
        assert!(!ShoeValidator::is_valid_code(""));
    }

    #[test]
    fn test_name_rules() {
        assert!(ShoeValidator::is_valid_name("South Africa"));
        assert!(!ShoeValidator::is_valid_name(""));
        assert!(!ShoeValidator::is_valid_name("   "));
        assert!(!ShoeValidator::is_valid_name("Air Max 90"));
    }

    #[test]
    fn test_validate_shoe() {
        let good = Shoe::new("UK", "SKU2345", "Boot", 40.0, 5);
        assert!(ShoeValidator::validate_shoe(&good).valid);

        let bad = Shoe::new("UK1", "2345", "Boot", -1.0, 5);
        let result = ShoeValidator::validate_shoe(&bad);
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 3);
    }

    #[test]
    fn test_duplicate_codes_warn() {
        let shoes = vec![
            Shoe::new("UK", "SKU2345", "Boot", 40.0, 5),
            Shoe::new("US", "SKU2345", "Sneaker", 20.0, 50),
        ];
        let result = ShoeValidator::validate_inventory(&shoes);

        assert!(result.valid);
        assert_eq!(result.warnings, vec!["Duplicate code: SKU2345"]);
    }
}
