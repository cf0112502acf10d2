//! Unit tests for the numerical transformers.

use tabcheck::data::{Cell, Table};
use tabcheck::transformers::numerical::{FloatFormatter, FloatFormatterConfig};
use tabcheck::transformers::Transformer;

fn number_table(values: &[f64]) -> Table {
    Table::with_column("value", values.iter().map(|v| Cell::Number(*v)).collect())
}

mod float_formatter {
    use super::*;

    fn fitted(values: &[f64]) -> FloatFormatter {
        let mut transformer = FloatFormatter::new(FloatFormatterConfig::default());
        transformer.fit(&number_table(values)).unwrap();
        transformer
    }

    #[test]
    fn test_fit_requires_the_configured_column() {
        let mut transformer = FloatFormatter::new(FloatFormatterConfig::default());
        let table = Table::with_column("other", vec![Cell::Number(1.0)]);
        let err = transformer.fit(&table).unwrap_err();
        assert!(err.to_string().contains("no column named 'value'"));
    }

    #[test]
    fn test_learn_rounding_digits_is_capped() {
        assert_eq!(FloatFormatter::learn_rounding_digits([1.5, 2.25], 6), 2);
        assert_eq!(FloatFormatter::learn_rounding_digits([0.123456789], 4), 4);
        assert_eq!(FloatFormatter::learn_rounding_digits([], 6), 0);
    }

    #[test]
    fn test_transform_rounds_to_learned_digits() {
        let transformer = fitted(&[1.25, 2.5]);
        let out = transformer.transform(&number_table(&[3.14159])).unwrap();
        assert_eq!(out.column("value").unwrap().cells, vec![Cell::Number(3.14)]);
    }

    #[test]
    fn test_transform_passes_nulls_through() {
        let transformer = fitted(&[1.0, 2.0]);
        let table = Table::with_column("value", vec![Cell::Null, Cell::Number(1.0)]);
        let out = transformer.transform(&table).unwrap();
        assert_eq!(
            out.column("value").unwrap().cells,
            vec![Cell::Null, Cell::Number(1.0)]
        );
    }

    #[test]
    fn test_transform_rejects_unfitted_use() {
        let transformer = FloatFormatter::new(FloatFormatterConfig::default());
        let err = transformer.transform(&number_table(&[1.0])).unwrap_err();
        assert!(err.to_string().contains("has not been fitted"));
    }

    #[test]
    fn test_reverse_transform_clamps_to_fitted_range() {
        let transformer = fitted(&[-10.0, 10.0]);
        let out = transformer
            .reverse_transform(&number_table(&[42.0, -42.0, 3.0]))
            .unwrap();
        assert_eq!(
            out.column("value").unwrap().cells,
            vec![Cell::Number(10.0), Cell::Number(-10.0), Cell::Number(3.0)]
        );
    }

    #[test]
    fn test_reverse_transform_handles_nan() {
        let transformer = fitted(&[-10.0, 10.0]);
        let out = transformer.reverse_transform(&number_table(&[f64::NAN])).unwrap();
        let cell = &out.column("value").unwrap().cells[0];
        assert!(cell.as_number().unwrap().is_nan());
    }

    #[test]
    fn test_reverse_transform_without_clamping() {
        let config = FloatFormatterConfig {
            clamp_on_reverse: false,
            ..FloatFormatterConfig::default()
        };
        let mut transformer = FloatFormatter::new(config);
        transformer.fit(&number_table(&[-10.0, 10.0])).unwrap();
        let out = transformer.reverse_transform(&number_table(&[42.0])).unwrap();
        assert_eq!(out.column("value").unwrap().cells, vec![Cell::Number(42.0)]);
    }
}
