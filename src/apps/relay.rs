use std::thread;

use crossbeam::channel::{unbounded, Receiver, Sender};
use fixvec::VectorF3;
use log::{debug, error, info};

pub enum RelayMessage {
    Measure(VectorF3),
    Stop,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub point: VectorF3,
    pub length: f32,
    pub dist: f32,
    pub direction: VectorF3,
}

pub fn relay_compute(reference: VectorF3, points: &[VectorF3]) -> Vec<Measurement> {
    let (tx, rx) = unbounded();
    let (result_tx, result_rx) = unbounded();

    let worker = thread::spawn(move || relay_worker(reference, rx, result_tx));
    for &point in points {
        tx.send(RelayMessage::Measure(point))
            .expect("relay worker hung up");
    }
    tx.send(RelayMessage::Stop).expect("relay worker hung up");
    worker.join().expect("relay worker panicked");

    let results: Vec<Measurement> = result_rx.iter().collect();
    for m in &results {
        info!(
            "point: {}| length: {:.4} | dist: {:.4} | direction: {:.4}",
            m.point, m.length, m.dist, m.direction
        );
    }
    results
}

fn relay_worker(reference: VectorF3, rx: Receiver<RelayMessage>, tx: Sender<Measurement>) {
    loop {
        match rx.recv() {
            Ok(RelayMessage::Measure(point)) => {
                let measurement = Measurement {
                    point,
                    length: point.length(),
                    dist: point.dist(&reference),
                    direction: (point - reference).normalized(),
                };
                if tx.send(measurement).is_err() {
                    error!("relay result channel closed (dropping thread)");
                    break;
                }
            }
            Ok(RelayMessage::Stop) => break,
            Err(..) => {
                error!("relay worker error mpsc message received (dropping thread)");
                break;
            }
        }
    }
    debug!("relay worker stopped");
}
