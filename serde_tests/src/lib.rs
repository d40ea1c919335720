#[cfg(test)]
mod tests {

    use rs_oracle_guesser::*;

    #[test]
    fn feedback_deserializes_from_oracle_wire_format() -> Result<(), serde_json::Error> {
        let body = r#"[
            {"slot": 0, "guess": "c", "result": "absent"},
            {"slot": 1, "guess": "r", "result": "present"},
            {"slot": 2, "guess": "a", "result": "correct"}
        ]"#;

        let feedback: Vec<FeedbackItem> = serde_json::from_str(body)?;

        assert_eq!(
            feedback,
            vec![
                FeedbackItem::new(0, 'c', LetterResult::Absent),
                FeedbackItem::new(1, 'r', LetterResult::Present),
                FeedbackItem::new(2, 'a', LetterResult::Correct),
            ]
        );
        Ok(())
    }

    #[test]
    fn feedback_serializes_with_wire_field_names() -> Result<(), serde_json::Error> {
        let item = FeedbackItem::new(4, 'e', LetterResult::Present);

        let ser = serde_json::to_string(&item)?;

        assert_eq!(ser, r#"{"slot":4,"guess":"e","result":"present"}"#);
        Ok(())
    }

    #[test]
    fn feedback_round_trips() -> Result<(), serde_json::Error> {
        let feedback = vec![
            FeedbackItem::new(0, 'b', LetterResult::Correct),
            FeedbackItem::new(1, 'l', LetterResult::Absent),
        ];

        let ser = serde_json::to_string(&feedback)?;
        let deser: Vec<FeedbackItem> = serde_json::from_str(&ser)?;

        assert_eq!(deser, feedback);
        Ok(())
    }

    #[test]
    fn unknown_result_status_is_rejected() {
        let body = r#"[{"slot": 0, "guess": "c", "result": "maybe"}]"#;

        let deser = serde_json::from_str::<Vec<FeedbackItem>>(body);

        assert!(deser.is_err());
    }
}
