#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use clap::error::ErrorKind;
    use clap::Parser;
    use gobblet::Options;

    #[test]
    fn test_no_flag_means_no_listing() {
        let options = Options::try_parse_from(["gobblet"]).unwrap();
        assert_eq!(options, Options { idul: None });
    }

    #[test]
    fn test_short_and_long_forms() {
        let short = Options::try_parse_from(["gobblet", "-l", "111222333"]).unwrap();
        assert_eq!(short.idul, Some(111222333));

        let long = Options::try_parse_from(["gobblet", "--lister", "42"]).unwrap();
        assert_eq!(long.idul, Some(42));

        let joined = Options::try_parse_from(["gobblet", "--lister=7"]).unwrap();
        assert_eq!(joined.idul, Some(7));
    }

    #[test]
    fn test_negative_value() {
        let options = Options::try_parse_from(["gobblet", "-l", "-3"]).unwrap();
        assert_eq!(options.idul, Some(-3));
    }

    #[test]
    fn test_non_integer_is_usage_error() {
        let err = Options::try_parse_from(["gobblet", "-l", "abc"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_missing_value_is_usage_error() {
        let err = Options::try_parse_from(["gobblet", "--lister"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_unknown_flag_rejected() {
        let err = Options::try_parse_from(["gobblet", "--verbose"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }
}
