//! # Row Layout
//!
//! Parses receipt markup into rows and composes each row into a fixed-width
//! character grid. Widths are measured in characters (`char` count), which is
//! what a fixed-pitch receipt printer advances by per glyph.

/// One rendered receipt row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    /// A composed text row, at most `cpl` characters wide.
    Text(String),
    /// A horizontal rule across the full row width.
    Rule,
}

/// Parse a document into rows at the given characters-per-line width.
pub fn parse(doc: &str, cpl: usize) -> Vec<Row> {
    doc.lines()
        .map(|line| {
            if is_rule(line) {
                Row::Rule
            } else {
                let cells: Vec<&str> = line.split('|').collect();
                Row::Text(compose(&cells, cpl))
            }
        })
        .collect()
}

/// A rule is a line of three or more dashes and nothing else.
fn is_rule(line: &str) -> bool {
    line.len() >= 3 && line.chars().all(|c| c == '-')
}

/// Compose column cells into a single row of at most `cpl` characters.
///
/// - one cell: left-aligned, clipped to the row width;
/// - two cells: left-aligned and right-justified;
/// - three or more: left, centered (middle cells joined by a space), right.
///
/// When columns collide the later placement wins; rows never exceed `cpl`.
fn compose(cells: &[&str], cpl: usize) -> String {
    match cells {
        [] => String::new(),
        [only] => clip(only, cpl),
        [left, right] => {
            let mut grid = vec![' '; cpl];
            place(&mut grid, 0, left);
            place_right(&mut grid, right);
            finish(grid)
        }
        [left, middle @ .., right] => {
            let mut grid = vec![' '; cpl];
            place(&mut grid, 0, left);
            let center = middle.join(" ");
            let center_width = center.chars().count().min(cpl);
            place(&mut grid, (cpl - center_width) / 2, &center);
            place_right(&mut grid, right);
            finish(grid)
        }
    }
}

fn clip(s: &str, width: usize) -> String {
    s.chars().take(width).collect()
}

/// Write `s` into the grid starting at `start`, clipped to the grid end.
fn place(grid: &mut [char], start: usize, s: &str) {
    for (i, c) in s.chars().enumerate() {
        let Some(slot) = grid.get_mut(start + i) else {
            break;
        };
        *slot = c;
    }
}

/// Write `s` flush against the right edge of the grid.
fn place_right(grid: &mut [char], s: &str) {
    let width = s.chars().count().min(grid.len());
    let start = grid.len() - width;
    place(grid, start, &clip(s, width));
}

fn finish(grid: Vec<char>) -> String {
    let row: String = grid.into_iter().collect();
    row.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn single_column_is_left_aligned() {
        assert_eq!(parse("Hello\n", 10), vec![Row::Text("Hello".into())]);
    }

    #[test]
    fn long_single_column_is_clipped() {
        assert_eq!(parse("abcdefgh\n", 4), vec![Row::Text("abcd".into())]);
    }

    #[test]
    fn two_columns_justify_left_and_right() {
        assert_eq!(
            parse("Total|9.50\n", 12),
            vec![Row::Text("Total   9.50".into())]
        );
    }

    #[test]
    fn three_columns_center_the_middle() {
        assert_eq!(
            parse("a|mid|z\n", 11),
            vec![Row::Text("a   mid   z".into())]
        );
    }

    #[test]
    fn rule_lines_are_detected() {
        assert_eq!(parse("---\n", 10), vec![Row::Rule]);
        assert_eq!(parse("--------\n", 10), vec![Row::Rule]);
        // Two dashes is just text
        assert_eq!(parse("--\n", 10), vec![Row::Text("--".into())]);
        // Dashes mixed with text are not a rule
        assert_eq!(parse("--x\n", 10), vec![Row::Text("--x".into())]);
    }

    #[test]
    fn blank_lines_are_empty_rows() {
        assert_eq!(
            parse("a\n\nb\n", 10),
            vec![
                Row::Text("a".into()),
                Row::Text("".into()),
                Row::Text("b".into()),
            ]
        );
    }

    #[test]
    fn colliding_columns_never_exceed_width() {
        let rows = parse("aaaaaaaa|bbbbbbbb\n", 10);
        let Row::Text(row) = &rows[0] else {
            panic!("expected text row");
        };
        assert!(row.chars().count() <= 10);
        assert!(row.ends_with("bbbbbbbb"));
    }

    #[test]
    fn spec_example_line_splits_into_two_cells() {
        assert_eq!(
            parse("text|Hello\n", 42),
            vec![Row::Text(format!("text{}Hello", " ".repeat(42 - 9)))]
        );
    }
}
