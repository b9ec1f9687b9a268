use pretty_assertions::assert_eq;

use super::*;

fn configs() -> [PipelineConfig; 4] {
    [
        PipelineConfig::default(),
        PipelineConfig::threaded(0),
        PipelineConfig::threaded(1),
        PipelineConfig::inline(),
    ]
}

// === Configuration ===

#[test]
fn default_is_threaded() {
    assert_eq!(
        PipelineConfig::default().execution,
        Execution::Threaded {
            capacity: DEFAULT_CHANNEL_CAPACITY
        }
    );
}

#[test]
fn with_capacity_switches_to_threaded() {
    let config = PipelineConfig::inline().with_capacity(8);
    assert_eq!(config.execution, Execution::Threaded { capacity: 8 });
    assert_eq!(Pipeline::new(config).config(), &config);
}

// === Execution ===

#[test]
fn every_execution_mode_agrees() {
    let inputs = [
        "",
        "   ",
        "hello",
        "  which   is  harder to   do for     some examples    than others",
        "tabs\tand\nnewlines\r\n",
        "ünïcödé\u{3000}日本語 🦀🦀",
    ];
    for input in inputs {
        let expected = Pipeline::new(PipelineConfig::inline()).run_str(input).ok();
        for config in configs() {
            let actual = Pipeline::new(config).run_str(input).ok();
            assert_eq!(actual, expected, "{config:?} on {input:?}");
        }
    }
}

#[test]
fn rendezvous_channel_handles_many_segments() {
    let input = "a ".repeat(1000);
    let out = Pipeline::new(PipelineConfig::threaded(0)).run_str(&input);
    assert_eq!(out.ok(), Some(input));
}

#[test]
fn invalid_bytes_fail_in_every_mode() {
    for config in configs() {
        let result = Pipeline::new(config).run_bytes(b"ok \xc3(");
        let err = result.as_ref().err().and_then(ParseError::scan_error);
        assert_eq!(
            err.map(|e| (e.message.as_str(), e.pos)),
            Some(("invalid UTF-8 sequence: 0xc3", 3)),
            "{config:?}"
        );
    }
}

#[test]
fn valid_bytes_match_str() {
    for config in configs() {
        let pipeline = Pipeline::new(config);
        let text = "bytes and  strings";
        assert_eq!(
            pipeline.run_bytes(text.as_bytes()).ok(),
            pipeline.run_str(text).ok()
        );
    }
}

#[test]
fn shared_pipeline_serves_concurrent_calls() {
    let pipeline = Pipeline::default();
    let inputs: Vec<String> = (0..16).map(|i| format!("call {i} of  many")).collect();

    let outputs: Vec<_> = thread::scope(|s| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|input| s.spawn(move || pipeline.run_str(input).ok()))
            .collect();
        handles.into_iter().map(|h| h.join().ok().flatten()).collect()
    });

    for (i, output) in outputs.iter().enumerate() {
        let digits: String = i.to_string().chars().rev().collect();
        assert_eq!(output.as_deref(), Some(format!("llac {digits} fo  ynam").as_str()));
    }
}

// === Backpressure ===

/// Poll `cond` for up to five seconds.
fn wait_until(mut cond: impl FnMut() -> bool) -> bool {
    let deadline = std::time::Instant::now() + std::time::Duration::from_secs(5);
    while std::time::Instant::now() < deadline {
        if cond() {
            return true;
        }
        thread::sleep(std::time::Duration::from_millis(1));
    }
    false
}

#[test]
fn producer_blocks_when_channel_is_full() {
    const CAPACITY: usize = 2;
    let input = "a ".repeat(50);
    let source = input.as_str();
    let (tx, rx) = channel::bounded(CAPACITY);

    thread::scope(|s| {
        let producer = s.spawn(move || produce(Scanner::new(source), &tx));

        assert!(wait_until(|| rx.len() == CAPACITY), "channel never filled");
        thread::sleep(std::time::Duration::from_millis(50));
        assert_eq!(rx.len(), CAPACITY);
        assert!(!producer.is_finished(), "producer ran ahead of the channel");

        let mut received = 0;
        let mut terminal = false;
        for segment in rx.iter() {
            assert!(rx.len() <= CAPACITY);
            received += 1;
            terminal = segment.is_terminal();
        }
        assert!(producer.join().is_ok());
        // 100 runs plus EndOfInput.
        assert_eq!(received, 101);
        assert!(terminal);
    });
}

#[test]
fn producer_stops_when_consumer_hangs_up() {
    let input = "a b c d e f g h";
    let (tx, rx) = channel::bounded(1);

    thread::scope(|s| {
        let producer = s.spawn(move || produce(Scanner::new(input), &tx));

        let first = rx.recv().ok();
        assert_eq!(first.map(|seg| seg.value.into_owned()).as_deref(), Some("a"));
        drop(rx);

        assert!(producer.join().is_ok());
    });
}
