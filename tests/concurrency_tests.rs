use fixvec::{vector, VectorD3};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn vectors_are_send_and_sync() {
    assert_send_sync::<VectorD3>();
    assert_send_sync::<fixvec::VectorC2>();
}

#[test]
fn shared_reads_agree_across_threads() {
    let shared: VectorD3 = vector![2.0, 3.0, 6.0];

    let lengths = crossbeam::scope(|s| {
        let handles: Vec<_> = (0..8).map(|_| s.spawn(|_| shared.length())).collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .collect::<Vec<_>>()
    })
    .unwrap();

    assert_eq!(lengths.len(), 8);
    assert!(lengths.iter().all(|&l| l == 7.0));
}

#[test]
fn per_thread_copies_mutate_independently() {
    let base: VectorD3 = vector![1.0, 1.0, 1.0];

    let results = crossbeam::scope(|s| {
        let handles: Vec<_> = (1..=4)
            .map(|k| {
                s.spawn(move |_| {
                    let mut local = base;
                    local.mul_scalar(k as f64);
                    local
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .collect::<Vec<_>>()
    })
    .unwrap();

    assert_eq!(base, vector![1.0, 1.0, 1.0]);
    for (k, v) in (1..=4).zip(results) {
        assert_eq!(v, VectorD3::from([k as f64; 3]));
    }
}
