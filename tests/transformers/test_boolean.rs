//! Unit tests for the boolean transformers.

use tabcheck::data::{Cell, Table};
use tabcheck::transformers::boolean::{BooleanEncoder, BooleanEncoderConfig};
use tabcheck::transformers::Transformer;

mod boolean_encoder {
    use super::*;

    fn fitted() -> BooleanEncoder {
        let mut transformer = BooleanEncoder::new(BooleanEncoderConfig::default());
        let table = Table::with_column("value", vec![Cell::Bool(true)]);
        transformer.fit(&table).unwrap();
        transformer
    }

    #[test]
    fn test_fit_requires_the_configured_column() {
        let mut transformer = BooleanEncoder::new(BooleanEncoderConfig::default());
        let table = Table::with_column("flag", vec![Cell::Bool(true)]);
        assert!(transformer.fit(&table).is_err());
    }

    #[test]
    fn test_transform_encodes_bools_as_floats() {
        let table = Table::with_column(
            "value",
            vec![Cell::Bool(true), Cell::Bool(false), Cell::Null],
        );
        let out = fitted().transform(&table).unwrap();
        assert_eq!(
            out.column("value").unwrap().cells,
            vec![Cell::Number(1.0), Cell::Number(0.0), Cell::Null]
        );
    }

    #[test]
    fn test_transform_rejects_non_boolean_cells() {
        let table = Table::with_column("value", vec![Cell::Text("yes".into())]);
        let err = fitted().transform(&table).unwrap_err();
        assert!(err.to_string().contains("unexpected cell"));
    }

    #[test]
    fn test_reverse_transform_uses_half_threshold() {
        let table = Table::with_column(
            "value",
            vec![Cell::Number(0.9), Cell::Number(0.5), Cell::Number(0.1)],
        );
        let out = fitted().reverse_transform(&table).unwrap();
        assert_eq!(
            out.column("value").unwrap().cells,
            vec![Cell::Bool(true), Cell::Bool(false), Cell::Bool(false)]
        );
    }

    #[test]
    fn test_reverse_transform_round_trips() {
        let encoder = fitted();
        let table = Table::with_column("value", vec![Cell::Bool(true), Cell::Bool(false)]);
        let restored = encoder
            .reverse_transform(&encoder.transform(&table).unwrap())
            .unwrap();
        assert_eq!(restored, table);
    }
}
