use std::error::Error;
use std::fmt;
use std::thread;
use std::time::Duration;

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, SampleFormat, SizedSample, StreamConfig};
use rtrb::{Consumer, Producer, RingBuffer};
use tracing::info;

use crate::graph::node::Frame;

/// How long the render thread naps while the ring is full (or the caller
/// is waiting for it to drain).
const RING_POLL: Duration = Duration::from_micros(500);

#[derive(Debug)]
pub enum OutputError {
    NoDevice,
    UnsupportedFormat(SampleFormat),
    Config(cpal::DefaultStreamConfigError),
    BuildStream(cpal::BuildStreamError),
    PlayStream(cpal::PlayStreamError),
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputError::NoDevice => write!(f, "no audio output device available"),
            OutputError::UnsupportedFormat(format) => {
                write!(f, "unsupported output sample format: {format}")
            }
            OutputError::Config(err) => write!(f, "querying output config failed: {err}"),
            OutputError::BuildStream(err) => write!(f, "building output stream failed: {err}"),
            OutputError::PlayStream(err) => write!(f, "starting output stream failed: {err}"),
        }
    }
}

impl Error for OutputError {}

impl From<cpal::DefaultStreamConfigError> for OutputError {
    fn from(err: cpal::DefaultStreamConfigError) -> Self {
        OutputError::Config(err)
    }
}

impl From<cpal::BuildStreamError> for OutputError {
    fn from(err: cpal::BuildStreamError) -> Self {
        OutputError::BuildStream(err)
    }
}

impl From<cpal::PlayStreamError> for OutputError {
    fn from(err: cpal::PlayStreamError) -> Self {
        OutputError::PlayStream(err)
    }
}

/// Realtime playback sink.
///
/// The render thread pushes stereo frame pairs into a lock-free SPSC ring;
/// the cpal callback drains it, substituting silence on underrun. Frames
/// are always moved as left/right pairs so an underrun can never put the
/// channels out of step.
pub struct AudioOutput {
    _stream: cpal::Stream,
    producer: Producer<f32>,
    capacity: usize,
    sample_rate: f32,
}

impl AudioOutput {
    /// Open the default output device with room for `buffer_frames` stereo
    /// frames between the render thread and the audio callback.
    pub fn open(buffer_frames: usize) -> Result<Self, OutputError> {
        let host = cpal::default_host();
        let device = host.default_output_device().ok_or(OutputError::NoDevice)?;
        let supported = device.default_output_config()?;
        let sample_format = supported.sample_format();
        let config: StreamConfig = supported.into();
        let sample_rate = config.sample_rate.0 as f32;

        let capacity = buffer_frames.max(64) * 2;
        let (producer, consumer) = RingBuffer::<f32>::new(capacity);

        let stream = match sample_format {
            SampleFormat::F32 => build_stream::<f32>(&device, &config, consumer)?,
            SampleFormat::I16 => build_stream::<i16>(&device, &config, consumer)?,
            SampleFormat::U16 => build_stream::<u16>(&device, &config, consumer)?,
            other => return Err(OutputError::UnsupportedFormat(other)),
        };
        stream.play()?;

        info!(sample_rate, capacity, "audio output open");

        Ok(Self {
            _stream: stream,
            producer,
            capacity,
            sample_rate,
        })
    }

    /// The device's sample rate; generator graphs should be built with it.
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Enqueue one frame, blocking while the ring is full.
    ///
    /// Blocking here is what paces an ahead-of-realtime render loop down
    /// to the device's consumption rate.
    pub fn push_frame(&mut self, frame: Frame) {
        let (left, right) = frame.to_stereo();
        loop {
            if self.producer.slots() >= 2 {
                // Cannot fail: slots were just checked and we are the only
                // producer.
                let _ = self.producer.push(left);
                let _ = self.producer.push(right);
                return;
            }
            thread::sleep(RING_POLL);
        }
    }

    /// Block until the callback has consumed everything pushed so far.
    pub fn wait_until_drained(&self) {
        while self.producer.slots() < self.capacity {
            thread::sleep(RING_POLL);
        }
    }
}

fn build_stream<T>(
    device: &cpal::Device,
    config: &StreamConfig,
    mut consumer: Consumer<f32>,
) -> Result<cpal::Stream, OutputError>
where
    T: SizedSample + FromSample<f32>,
{
    let channels = config.channels as usize;

    let stream = device.build_output_stream(
        config,
        move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
            for out_frame in data.chunks_mut(channels) {
                // Consume whole pairs only; a half-written pair waits for
                // the next callback instead of swapping channels.
                let (left, right) = if consumer.slots() >= 2 {
                    (
                        consumer.pop().unwrap_or(0.0),
                        consumer.pop().unwrap_or(0.0),
                    )
                } else {
                    (0.0, 0.0)
                };

                if channels == 1 {
                    out_frame[0] = T::from_sample((left + right) * 0.5);
                } else {
                    out_frame[0] = T::from_sample(left);
                    out_frame[1] = T::from_sample(right);
                    for extra in &mut out_frame[2..] {
                        *extra = T::from_sample(0.0f32);
                    }
                }
            }
        },
        |err| eprintln!("audio stream error: {err}"),
        None,
    )?;

    Ok(stream)
}
