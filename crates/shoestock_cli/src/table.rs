//! Plain-text table rendering.

/// Render rows under headers as padded, left-aligned columns with a
/// separator line, ending in a trailing newline.
///
/// Every row must have one cell per header.
pub fn render(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    push_row(&mut out, &header_cells, &widths);

    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, &separator, &widths);

    for row in rows {
        push_row(&mut out, row, &widths);
    }

    out
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let rendered: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{:<width$}", cell))
        .collect();

    out.push_str(rendered.join("  ").trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_alignment() {
        let rows = vec![
            vec!["UK".to_string(), "SKU2345".to_string()],
            vec!["South Africa".to_string(), "SKU1".to_string()],
        ];
        let table = render(&["Country", "Code"], &rows);

        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Country       Code");
        assert_eq!(lines[1], "------------  -------");
        assert_eq!(lines[2], "UK            SKU2345");
        assert_eq!(lines[3], "South Africa  SKU1");
    }

    #[test]
    fn test_render_no_rows() {
        let table = render(&["Country", "Code"], &[]);
        assert_eq!(table.lines().count(), 2);
    }
}
