use super::*;

fn lines(buffer: Vec<u8>) -> Vec<(f64, usize)> {
    String::from_utf8(buffer)
        .unwrap()
        .lines()
        .map(|line| {
            let (secs, size) = line.split_once(',').expect("trace line has two fields");
            (secs.parse().unwrap(), size.parse().unwrap())
        })
        .collect()
}

#[test]
fn test_record_format() {
    let mut trace = Trace::new(Vec::new());
    trace.record(5).unwrap();
    trace.record(3).unwrap();
    let entries = lines(trace.into_inner());
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].1, 5);
    assert_eq!(entries[1].1, 3);
    assert!(entries[0].0 >= 0.0);
    assert!(entries[1].0 >= entries[0].0);
}

#[test]
fn test_elapsed_is_monotone() {
    let trace = Trace::new(Vec::new());
    let first = trace.elapsed();
    let second = trace.elapsed();
    assert!(second >= first);
}

#[test]
fn test_create_writes_file() {
    let path = std::env::temp_dir().join("minvc_trace_test.trace");
    let mut trace = Trace::create(&path).unwrap();
    trace.record(7).unwrap();
    trace.flush().unwrap();
    drop(trace);
    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.trim_end().ends_with(",7"));
    std::fs::remove_file(path).ok();
}
