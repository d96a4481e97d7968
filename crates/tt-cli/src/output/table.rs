/// Render an aligned table. Numeric cells are right-aligned.
#[must_use]
pub fn render(headers: &[&str], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.chars().count())
        })
        .collect();

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(header, *width, false))
        .collect::<Vec<_>>()
        .join("  ");
    let divider = "-".repeat(header_line.chars().count());

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line.trim_end().to_string());
    lines.push(divider);
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let cell = row.get(index).map_or("-", String::as_str);
                pad(cell, *width, looks_numeric(cell))
            })
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

fn pad(value: &str, width: usize, right: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(value.chars().count()));
    if right {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

fn looks_numeric(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '.'))
        && value.chars().any(|ch| ch.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::render;

    #[test]
    fn columns_align_to_widest_cell() {
        let rows = vec![
            vec!["emp-1".to_string(), "Jackie Chiles".to_string(), "55".to_string()],
            vec!["emp-200".to_string(), "Jo".to_string(), "7".to_string()],
        ];
        let out = render(&["id", "name", "qbo_id"], &rows);
        assert_eq!(
            out,
            "id       name           qbo_id\n\
             ------------------------------\n\
             emp-1    Jackie Chiles      55\n\
             emp-200  Jo                  7"
        );
    }
}
