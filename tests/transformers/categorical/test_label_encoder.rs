//! Unit tests for the categorical transformers.

use tabcheck::data::{Cell, Table};
use tabcheck::transformers::categorical::label_encoder::{LabelEncoder, LabelEncoderConfig};
use tabcheck::transformers::Transformer;

fn label_table(labels: &[&str]) -> Table {
    Table::with_column(
        "value",
        labels.iter().map(|l| Cell::Text(l.to_string())).collect(),
    )
}

mod label_encoder {
    use super::*;

    fn fitted(labels: &[&str]) -> LabelEncoder {
        let mut encoder = LabelEncoder::new(LabelEncoderConfig::default());
        encoder.fit(&label_table(labels)).unwrap();
        encoder
    }

    #[test]
    fn test_fit_collects_categories_in_first_seen_order() {
        let encoder = fitted(&["b", "a", "b", "c"]);
        assert_eq!(encoder.categories(), &["b", "a", "c"]);
    }

    #[test]
    fn test_categories_are_empty_before_fit() {
        let encoder = LabelEncoder::new(LabelEncoderConfig::default());
        assert!(encoder.categories().is_empty());
    }

    #[test]
    fn test_transform_maps_labels_to_indexes() {
        let encoder = fitted(&["low", "mid", "high"]);
        let out = encoder.transform(&label_table(&["high", "low"])).unwrap();
        assert_eq!(
            out.column("value").unwrap().cells,
            vec![Cell::Number(2.0), Cell::Number(0.0)]
        );
    }

    #[test]
    fn test_transform_errors_on_unseen_category() {
        let encoder = fitted(&["low", "mid"]);
        let err = encoder.transform(&label_table(&["high"])).unwrap_err();
        assert!(err.to_string().contains("unseen category 'high'"));
    }

    #[test]
    fn test_reverse_transform_round_trips() {
        let encoder = fitted(&["low", "mid", "high"]);
        let table = label_table(&["mid", "high", "mid"]);
        let restored = encoder
            .reverse_transform(&encoder.transform(&table).unwrap())
            .unwrap();
        assert_eq!(restored, table);
    }

    #[test]
    fn test_reverse_transform_rejects_out_of_range_indexes() {
        let encoder = fitted(&["low", "mid"]);
        let table = Table::with_column("value", vec![Cell::Number(5.0)]);
        assert!(encoder.reverse_transform(&table).is_err());
        let negative = Table::with_column("value", vec![Cell::Number(-1.0)]);
        assert!(encoder.reverse_transform(&negative).is_err());
    }
}
