use memento_core::{Error, History, Subject};
use memento_demo::{Record, run};

#[test]
fn prints_three_saves_then_first_restored() {
    let mut out = Vec::new();
    run(&mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert_eq!(
        text,
        "Id = 1 Name = Object 1\n\
         Id = 2 Name = Object 2\n\
         Id = 3 Name = Object 3\n\
         Id = 1 Name = Object 1\n"
    );
}

#[test]
fn every_saved_index_restores_its_record() {
    let mut subject = Subject::new();
    let mut history = History::new();
    let records: Vec<Record> = (1..=5)
        .map(|id| Record::new(id, format!("Object {id}")))
        .collect();

    for record in &records {
        subject.set_state(record.clone());
        history.save(&subject).unwrap();
    }

    for (index, record) in records.iter().enumerate().rev() {
        history.restore(&mut subject, index).unwrap();
        assert_eq!(subject.state(), Some(record));
    }
}

#[test]
fn editing_restored_record_does_not_rewrite_history() {
    let mut subject = Subject::with_state(Record::new(1, "Object 1"));
    let mut history = History::new();
    history.save(&subject).unwrap();

    history.restore(&mut subject, 0).unwrap();
    if let Some(record) = subject.state_mut() {
        record.id = 100;
        record.name.push_str(" (changed)");
    }

    history.restore(&mut subject, 0).unwrap();
    assert_eq!(subject.to_string(), "Id = 1 Name = Object 1");
}

#[test]
fn restore_past_end_is_reported() {
    let mut subject = Subject::new();
    let mut history = History::new();
    subject.set_state(Record::new(1, "Object 1"));
    history.save(&subject).unwrap();

    let err = history.restore(&mut subject, 1).unwrap_err();
    assert_eq!(err, Error::OutOfRange { index: 1, len: 1 });
}
