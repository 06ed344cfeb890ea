//! Text parser for series data files.
//!
//! A series file holds one point per line: two whitespace-separated decimal
//! numbers. Reading stops at the first blank line. A single malformed line
//! before that point invalidates the whole file and yields no points.

use super::Point;

/// Parse file content into points.
pub fn parse_content(content: &str) -> Vec<Point> {
    let mut points = Vec::new();

    for line in content.lines() {
        let mut fields = line.split_whitespace();

        let Some(first) = fields.next() else {
            // blank line ends the series
            break;
        };

        match (parse_number(first), fields.next().and_then(parse_number)) {
            (Some(x), Some(y)) => points.push(Point::new(x, y)),
            _ => {
                tracing::warn!(line, "malformed series line, discarding series");
                return Vec::new();
            },
        }
    }

    points
}

fn parse_number(field: &str) -> Option<f64> {
    field.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stops_at_blank_line() {
        let points = parse_content("1 2\n3 4\n\n5 6");
        assert_eq!(points, vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)]);
    }

    #[test]
    fn malformed_line_empties_series() {
        assert!(parse_content("1 2\n3 x\n5 6").is_empty());
        assert!(parse_content("1 2\n3\n").is_empty());
        assert!(parse_content("abc def").is_empty());
    }

    #[test]
    fn malformed_after_blank_line_is_ignored() {
        let points = parse_content("1 2\n\nnot numbers");
        assert_eq!(points, vec![Point::new(1.0, 2.0)]);
    }

    #[test]
    fn accepts_tabs_repeated_spaces_and_crlf() {
        let points = parse_content("0.5\t1e3\r\n2    -3.25\r\n");
        assert_eq!(points, vec![Point::new(0.5, 1000.0), Point::new(2.0, -3.25)]);
    }

    #[test]
    fn rejects_non_finite_values() {
        assert!(parse_content("1 NaN").is_empty());
        assert!(parse_content("inf 2").is_empty());
    }

    #[test]
    fn extra_fields_are_ignored() {
        let points = parse_content("1 2 3\n4 5 comment");
        assert_eq!(points, vec![Point::new(1.0, 2.0), Point::new(4.0, 5.0)]);
    }

    #[test]
    fn empty_content_is_empty_series() {
        assert!(parse_content("").is_empty());
        assert!(parse_content("\n1 2").is_empty());
    }
}
