#[cfg(test)]
mod tests {
    use super::super::executers::*;
    use super::super::resources::{ActionError, NumberFileSettings};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::fs;
    use std::path::Path;

    #[test]
    fn test_greeting_for() {
        assert_eq!(greeting_for("Anna"), Some("Hello, Anna!".to_string()));
        assert_eq!(greeting_for("  Bob "), Some("Hello,   Bob !".to_string()));
        assert_eq!(greeting_for(" "), Some("Hello,  !".to_string()));
        assert_eq!(greeting_for(""), None);
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("first", " 2.5 "), Ok(2.5));
        assert_eq!(parse_number("first", "-3"), Ok(-3.0));
        assert_eq!(parse_number("first", "1e3"), Ok(1000.0));
        assert!(matches!(
            parse_number("second", "abc"),
            Err(ActionError::InvalidNumber { field: "second", .. })
        ));
        assert!(parse_number("second", "").is_err());
    }

    #[test]
    fn test_calculate_and_render() {
        let report = calculate(6.0, 3.0);
        assert_eq!(report.sum, 9.0);
        assert_eq!(report.difference, 3.0);
        assert_eq!(report.product, 18.0);
        assert_eq!(report.quotient, Some(2.0));
        assert_eq!(
            report.render(),
            "Sum: 9.0\nDifference: 3.0\nProduct: 18.0\nQuotient: 2.0"
        );
    }

    #[test]
    fn test_division_by_zero_keeps_other_results() {
        let report = calculate(5.0, 0.0);
        assert_eq!(report.quotient, None);
        let text = report.render();
        assert!(text.starts_with("Sum: 5.0\nDifference: 5.0\nProduct: 0.0\n"));
        assert!(text.ends_with("Quotient: Division by zero is impossible"));
    }

    #[test]
    fn test_float_rendering_is_round_trip() {
        let report = calculate(0.1, 0.2);
        assert!(report.render().starts_with("Sum: 0.30000000000000004\n"));
    }

    #[test]
    fn test_exponent_formatting() {
        assert_eq!(format_number(1e16), "1e+16");
        assert_eq!(format_number(1.5e16), "1.5e+16");
        assert_eq!(format_number(1e-5), "1e-05");
        assert_eq!(format_number(2.5e-300), "2.5e-300");
        assert_eq!(format_number(1e15), "1000000000000000.0");
        assert_eq!(format_number(0.0001), "0.0001");
        assert_eq!(format_number(f64::INFINITY), "inf");
        assert_eq!(format_number(f64::NAN), "nan");
        assert!(calculate(1e16, 1.0).render().contains("Product: 1e+16"));
    }

    #[test]
    fn test_mean_of() {
        assert_eq!(mean_of(&[1, 2, 3]), Some(Mean::Exact(2)));
        assert_eq!(mean_of(&[1, 2]), Some(Mean::Fractional(1.5)));
        assert_eq!(mean_of(&[-4, 4]), Some(Mean::Exact(0)));
        assert_eq!(mean_of(&[1, 2, 2]).unwrap().to_string(), "1.6666666666666667");
        assert_eq!(mean_of(&[i64::MAX, i64::MAX]), Some(Mean::Exact(i64::MAX)));
        assert_eq!(mean_of(&[]), None);
        assert_eq!(Mean::Exact(2).to_string(), "2");
        assert_eq!(Mean::Fractional(1.5).to_string(), "1.5");
    }

    #[test]
    fn test_parse_numbers_skips_noise() {
        let source = Path::new("in.txt");
        let text = "1\n  2 \n\nabc\n3.5\n-4\n+5\n";
        assert_eq!(parse_numbers(text, source), Ok(vec![1, 2]));
        assert_eq!(parse_numbers("", source), Ok(vec![]));
    }

    #[test]
    fn test_signed_lines_do_not_count() {
        let dir = tempfile::tempdir().unwrap();
        let mixed = dir.path().join("mixed.txt");
        fs::write(&mixed, "10\n-4\n+5").unwrap();
        assert_eq!(average_of_file(mixed.to_str().unwrap()), Ok(Mean::Exact(10)));

        let negatives = dir.path().join("negatives.txt");
        fs::write(&negatives, "-1\n-2").unwrap();
        assert_eq!(
            average_of_file(negatives.to_str().unwrap()),
            Err(ActionError::NoNumbers)
        );
    }

    #[test]
    fn test_parse_numbers_overflow_is_data_error() {
        let source = Path::new("big.txt");
        assert_eq!(
            parse_numbers("1\n99999999999999999999999\n", source),
            Err(ActionError::DataProcessing(source.to_path_buf()))
        );
    }

    #[test]
    fn test_average_of_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("numbers.txt");
        fs::write(&path, "1\n2\n3").unwrap();
        let result = average_of_file(path.to_str().unwrap());
        assert_eq!(result, Ok(Mean::Exact(2)));
    }

    #[test]
    fn test_average_of_file_errors() {
        assert_eq!(average_of_file(""), Err(ActionError::FileNotSelected));

        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");
        let err = average_of_file(missing.to_str().unwrap()).unwrap_err();
        assert_eq!(err, ActionError::FileNotFound(missing.clone()));
        assert_eq!(
            err.to_string(),
            format!("Error: File {} not found.", missing.display())
        );

        let empty = dir.path().join("empty.txt");
        fs::write(&empty, "\nhello\n").unwrap();
        assert_eq!(average_of_file(empty.to_str().unwrap()), Err(ActionError::NoNumbers));

        let binary = dir.path().join("binary.txt");
        fs::write(&binary, [0xff, 0xfe, 0x00, 0x31]).unwrap();
        assert_eq!(
            average_of_file(binary.to_str().unwrap()),
            Err(ActionError::DataProcessing(binary.clone()))
        );
    }

    #[test]
    fn test_generate_number_files() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested").join("out");
        let settings = NumberFileSettings::default();
        let mut rng = StdRng::seed_from_u64(7);

        let written =
            generate_number_files(target.to_str().unwrap(), &settings, &mut rng).unwrap();

        assert_eq!(written.len(), 3);
        for (i, path) in written.iter().enumerate() {
            assert_eq!(path, &target.join(format!("numbers_{}.txt", i + 1)));
            let text = fs::read_to_string(path).unwrap();
            assert!(!text.ends_with('\n'));
            let values: Vec<i64> = text.lines().map(|l| l.parse().unwrap()).collect();
            assert_eq!(values.len(), 10);
            assert!(values.iter().all(|v| (1..=100).contains(v)));
        }
    }

    #[test]
    fn test_generate_number_files_overwrites_and_honours_settings() {
        let dir = tempfile::tempdir().unwrap();
        let settings = NumberFileSettings {
            file_count: 2,
            numbers_per_file: 4,
            value_range: 5..=5,
            file_prefix: "run_".to_string(),
            file_extension: "dat".to_string(),
        };
        fs::write(dir.path().join("run_1.dat"), "old contents").unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        generate_number_files(dir.path().to_str().unwrap(), &settings, &mut rng).unwrap();

        assert_eq!(fs::read_to_string(dir.path().join("run_1.dat")).unwrap(), "5\n5\n5\n5");
        assert_eq!(fs::read_to_string(dir.path().join("run_2.dat")).unwrap(), "5\n5\n5\n5");
        assert!(!dir.path().join("run_3.dat").exists());
    }

    #[test]
    fn test_generate_number_files_requires_directory() {
        let mut rng = StdRng::seed_from_u64(0);
        let settings = NumberFileSettings::default();
        assert_eq!(
            generate_number_files("  ", &settings, &mut rng),
            Err(ActionError::DirectoryNotSelected)
        );
    }

    #[test]
    fn test_generate_number_files_reports_io_failure() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not_a_dir");
        fs::write(&blocker, "x").unwrap();
        let mut rng = StdRng::seed_from_u64(0);

        let err = generate_number_files(
            blocker.to_str().unwrap(),
            &NumberFileSettings::default(),
            &mut rng,
        )
        .unwrap_err();
        assert!(matches!(err, ActionError::FileGeneration(_)));
        assert_eq!(err.to_string(), "Error: failed to create files!");
    }
}
