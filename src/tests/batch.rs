use crate::{
    parse_records, AttributeRecord, BatchError, BatchSummary, CancellationFlag, TitleParser,
    TitleRecord,
};

fn records() -> Vec<TitleRecord> {
    vec![
        TitleRecord::new("1", "Шайба 5²x10 синий"),
        TitleRecord::new("2", "Rod 150мм синий"),
        TitleRecord::new("3", "RAL-9005 panel"),
        TitleRecord::new("4", "Набор"),
    ]
}

#[test]
fn faulting_title_does_not_stop_the_batch() {
    let output =
        parse_records(&TitleParser::default(), records(), &CancellationFlag::new()).unwrap();

    assert_eq!(
        output.records,
        vec![
            AttributeRecord {
                id: "1".into(),
                length: None,
                diameter: None,
                color: "".into(),
            },
            AttributeRecord {
                id: "2".into(),
                length: Some(150.0),
                diameter: None,
                color: "синий".into(),
            },
            AttributeRecord {
                id: "3".into(),
                length: None,
                diameter: None,
                color: "RAL 9005".into(),
            },
            AttributeRecord {
                id: "4".into(),
                length: None,
                diameter: None,
                color: "".into(),
            },
        ]
    );
    assert_eq!(
        output.summary,
        BatchSummary {
            total: 4,
            with_dimensions: 1,
            with_color: 2,
            faults: 1,
        }
    );
}

#[test]
fn cancelled_before_start() {
    let cancel = CancellationFlag::new();
    cancel.cancel();

    let err = parse_records(&TitleParser::default(), records(), &cancel).unwrap_err();
    assert_eq!(err, BatchError::Cancelled { processed: 0 });
}

#[test]
fn cancelled_mid_batch() {
    let cancel = CancellationFlag::new();
    let trigger = cancel.clone();
    let records = records().into_iter().enumerate().map(move |(idx, record)| {
        if idx == 2 {
            trigger.cancel();
        }
        record
    });

    let err = parse_records(&TitleParser::default(), records, &cancel).unwrap_err();
    assert_eq!(err, BatchError::Cancelled { processed: 2 });
}
