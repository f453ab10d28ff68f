use exrunner_core::Position;

/// Split `path[:line[:column]]` into the path and a zero-based position.
/// Line and column are 1-based on the command line; a missing column means
/// the first one.
pub fn parse_filepath_with_position(filepath_arg: &str) -> (String, Option<Position>) {
    let Some((rest, last)) = split_number(filepath_arg) else {
        return (filepath_arg.to_string(), None);
    };

    match split_number(rest) {
        Some((path, line)) => (path.to_string(), Some(Position::from_one_based(line, last))),
        None => (rest.to_string(), Some(Position::from_one_based(last, 1))),
    }
}

fn split_number(s: &str) -> Option<(&str, u32)> {
    let colon_pos = s.rfind(':')?;
    let number = s[colon_pos + 1..].parse().ok()?;
    Some((&s[..colon_pos], number))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_path() {
        assert_eq!(
            parse_filepath_with_position("lib/app.ex"),
            ("lib/app.ex".to_string(), None)
        );
    }

    #[test]
    fn test_path_with_line() {
        assert_eq!(
            parse_filepath_with_position("test/app_test.exs:12"),
            ("test/app_test.exs".to_string(), Some(Position::new(11, 0)))
        );
    }

    #[test]
    fn test_path_with_line_and_column() {
        assert_eq!(
            parse_filepath_with_position("/root/lib/foo.ex:3:5"),
            ("/root/lib/foo.ex".to_string(), Some(Position::new(2, 4)))
        );
    }

    #[test]
    fn test_non_numeric_suffix_is_part_of_path() {
        assert_eq!(
            parse_filepath_with_position("lib/odd:name.ex"),
            ("lib/odd:name.ex".to_string(), None)
        );
    }
}
