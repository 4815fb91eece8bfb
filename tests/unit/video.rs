use std::io;
use std::sync::{Arc, Mutex};

use super::*;
use crate::encode::sink::InMemorySink;
use crate::stack::model::ChannelMode;
use ndarray::{Array3, Array4};
use num_complex::Complex64;

/// Frame `t` of the result holds values `t + {0, 1, 2, 3}` over a 2x2 grid.
fn gradient_stack(frames: usize) -> ImageStack {
    let mut data = Array4::zeros((frames, 2, 2, 1));
    for t in 0..frames {
        for r in 0..2 {
            for c in 0..2 {
                data[[t, r, c, 0]] = (t + r * 2 + c) as f64;
            }
        }
    }
    ImageStack::Channels(data)
}

fn opts_at(fps: u32) -> AnimateOpts {
    AnimateOpts::new(Fps::from_hz(fps).unwrap())
}

#[test]
fn streams_all_frames_in_order() {
    let stack = gradient_stack(5);
    let mut sink = InMemorySink::new();
    let stats = animate_into(&stack, &opts_at(40), &mut sink).unwrap();

    assert_eq!(stats.frames_total, 5);
    let frames = sink.frames();
    assert_eq!(frames.len(), 5);
    for (i, (idx, frame)) in frames.iter().enumerate() {
        assert_eq!(idx.0, i as u64);
        assert_eq!((frame.width, frame.height), (2, 2));
    }

    let cfg = sink.config().unwrap();
    assert_eq!((cfg.width, cfg.height), (2, 2));
    assert_eq!(cfg.fps, Fps::from_hz(40).unwrap());
}

#[test]
fn channel_shape_error_precedes_sink_begin() {
    let stack = ImageStack::Channels(Array4::zeros((2, 2, 2, 3)));
    let mut sink = InMemorySink::new();
    let err = animate_into(&stack, &opts_at(30), &mut sink).unwrap_err();

    assert!(matches!(err, HoloreelError::ChannelShape(_)));
    assert!(sink.config().is_none());
    assert!(sink.frames().is_empty());
}

#[test]
fn autoscale_reports_the_shared_range() {
    let stack = gradient_stack(3);
    let mut sink = InMemorySink::new();

    let stats = animate_into(&stack, &opts_at(30), &mut sink).unwrap();
    assert_eq!(stats.shared_range, None);

    let mut opts = opts_at(30);
    opts.autoscale = true;
    let stats = animate_into(&stack, &opts, &mut sink).unwrap();
    assert_eq!(
        stats.shared_range,
        Some(ColorRange { min: 0.0, max: 5.0 })
    );
}

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[test]
fn autoscale_logs_the_computed_range() {
    let log = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(log.clone())
        .finish();

    let stack = gradient_stack(3);
    let mut sink = InMemorySink::new();
    let mut opts = opts_at(30);
    opts.autoscale = true;
    tracing::subscriber::with_default(subscriber, || {
        animate_into(&stack, &opts, &mut sink).unwrap();
    });

    let events = log.contents();
    assert!(events.contains("computed global color range"));
    assert!(events.contains("min=0"));
    assert!(events.contains("max=5"));
}

#[test]
fn parallel_matches_sequential() {
    let stack = gradient_stack(8);

    let mut seq_sink = InMemorySink::new();
    let mut seq_opts = opts_at(30);
    seq_opts.autoscale = true;
    animate_into(&stack, &seq_opts, &mut seq_sink).unwrap();

    let mut par_sink = InMemorySink::new();
    let mut par_opts = seq_opts;
    par_opts.parallel = true;
    par_opts.chunk_size = 3;
    par_opts.threads = Some(2);
    animate_into(&stack, &par_opts, &mut par_sink).unwrap();

    assert_eq!(seq_sink.frames().len(), par_sink.frames().len());
    for ((ia, fa), (ib, fb)) in seq_sink.frames().iter().zip(par_sink.frames().iter()) {
        assert_eq!(ia, ib);
        assert_eq!(fa.data, fb.data);
    }
}

#[test]
fn zero_threads_is_rejected_before_the_sink_starts() {
    let stack = gradient_stack(2);
    let mut sink = InMemorySink::new();
    let mut opts = opts_at(30);
    opts.parallel = true;
    opts.threads = Some(0);

    let err = animate_into(&stack, &opts, &mut sink).unwrap_err();
    assert!(matches!(err, HoloreelError::Validation(_)));
    assert!(sink.config().is_none());
}

#[test]
fn chunk_size_zero_behaves_as_one() {
    let stack = gradient_stack(4);
    let mut sink = InMemorySink::new();
    let mut opts = opts_at(30);
    opts.chunk_size = 0;

    let stats = animate_into(&stack, &opts, &mut sink).unwrap();
    assert_eq!(stats.frames_total, 4);
    assert_eq!(sink.frames().len(), 4);
}

#[test]
fn empty_stacks_are_rejected() {
    let mut sink = InMemorySink::new();
    let no_frames = ImageStack::Channels(Array4::zeros((0, 2, 2, 1)));
    assert!(animate_into(&no_frames, &opts_at(30), &mut sink).is_err());

    let no_rows = ImageStack::Channels(Array4::zeros((2, 0, 2, 1)));
    assert!(animate_into(&no_rows, &opts_at(30), &mut sink).is_err());
}

#[test]
fn render_frame_matches_the_animated_frame() {
    let stack = gradient_stack(5);
    let mut opts = opts_at(30);
    opts.autoscale = true;

    let mut sink = InMemorySink::new();
    animate_into(&stack, &opts, &mut sink).unwrap();

    let single = render_frame(&stack, FrameIndex(2), &opts).unwrap();
    assert_eq!(single.data, sink.frames()[2].1.data);
}

#[test]
fn complex_stacks_animate_on_the_selected_part() {
    let mut data = Array3::zeros((2, 2, 2));
    for t in 0..2 {
        for r in 0..2 {
            for c in 0..2 {
                let v = (t * 4 + r * 2 + c) as f64;
                data[[t, r, c]] = Complex64::new(v, 100.0 + v);
            }
        }
    }
    let stack = ImageStack::Complex(data);
    assert_eq!(
        stack.channel_mode(ChannelSelect::Imaginary).unwrap(),
        ChannelMode::Complex(ChannelSelect::Imaginary)
    );

    let mut opts = opts_at(30);
    opts.channel = ChannelSelect::Imaginary;
    opts.autoscale = true;
    let mut sink = InMemorySink::new();
    let stats = animate_into(&stack, &opts, &mut sink).unwrap();

    assert_eq!(stats.frames_total, 2);
    assert_eq!(
        stats.shared_range,
        Some(ColorRange {
            min: 100.0,
            max: 107.0
        })
    );
}
