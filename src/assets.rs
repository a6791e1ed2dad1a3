//! Asset loading for the ball sprite and the bounce cue
//!
//! Both assets are required: any failure here is fatal at startup.

use std::io::{Cursor, Read};
use std::path::Path;
use std::sync::Arc;

use crate::consts::{AUDIO_BITS_PER_SAMPLE, AUDIO_CHANNELS, AUDIO_SAMPLE_RATE};
use crate::error::{GameError, Result};

/// A PNG image that decoded cleanly at load time
///
/// The encoded bytes are kept for the renderer's upload path; the core only
/// needs the sprite's dimensions.
#[derive(Debug, Clone)]
pub struct ImageHandle {
    pub width: u32,
    pub height: u32,
    pub bytes: Arc<[u8]>,
}

/// Decoded PCM samples for a sound cue (mono, 16-bit, 44.1 kHz)
#[derive(Debug, Clone)]
pub struct AudioClip {
    pub samples: Arc<[i16]>,
}

impl AudioClip {
    pub fn sample_rate(&self) -> u32 {
        AUDIO_SAMPLE_RATE
    }

    pub fn channels(&self) -> u16 {
        AUDIO_CHANNELS
    }
}

/// Load and fully decode a PNG image from disk
pub fn load_image(path: impl AsRef<Path>) -> Result<ImageHandle> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    let image = decode_png(bytes)?;
    log::info!(
        "Loaded image {} ({}x{})",
        path.display(),
        image.width,
        image.height
    );
    Ok(image)
}

/// Decode every chunk of a PNG stream; truncated or corrupt data is an error
pub fn decode_png(bytes: Vec<u8>) -> Result<ImageHandle> {
    let frame = {
        let decoder = png::Decoder::new(Cursor::new(&bytes[..]));
        let mut reader = decoder.read_info().map_err(image_error)?;
        let mut pixels = vec![0; reader.output_buffer_size()];
        let frame = reader.next_frame(&mut pixels).map_err(image_error)?;
        reader.finish().map_err(image_error)?;
        frame
    };

    Ok(ImageHandle {
        width: frame.width,
        height: frame.height,
        bytes: bytes.into(),
    })
}

fn image_error(e: png::DecodingError) -> GameError {
    GameError::Image(e.to_string())
}

/// Load a WAV cue from disk
pub fn load_audio(path: impl AsRef<Path>) -> Result<AudioClip> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;
    let clip = decode_wav(std::io::BufReader::new(file))?;
    log::info!(
        "Loaded audio {} ({} samples)",
        path.display(),
        clip.samples.len()
    );
    Ok(clip)
}

/// Decode a canonical PCM WAV stream
///
/// The header is parsed rather than skipped, so a file in any other layout
/// is rejected instead of being played back as noise.
pub fn decode_wav<R: Read>(reader: R) -> Result<AudioClip> {
    let mut reader = hound::WavReader::new(reader)?;
    let spec = reader.spec();
    if spec.sample_format != hound::SampleFormat::Int
        || spec.bits_per_sample != AUDIO_BITS_PER_SAMPLE
        || spec.channels != AUDIO_CHANNELS
        || spec.sample_rate != AUDIO_SAMPLE_RATE
    {
        return Err(GameError::Audio(format!(
            "expected {} Hz, {} channel, {}-bit PCM; got {} Hz, {} channel(s), {}-bit {:?}",
            AUDIO_SAMPLE_RATE,
            AUDIO_CHANNELS,
            AUDIO_BITS_PER_SAMPLE,
            spec.sample_rate,
            spec.channels,
            spec.bits_per_sample,
            spec.sample_format,
        )));
    }
    let samples = reader
        .samples::<i16>()
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(AudioClip {
        samples: samples.into(),
    })
}
