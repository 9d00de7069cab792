//! Splits a multichannel WAV file into one mono file per channel.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};
use wavsplit_format::{
    channel_labels, derive_mono, parse_header, write_header, FormatError, Header,
};

use crate::error::SplitError;

/// Sample frames copied per read.
const FRAMES_PER_READ: usize = 4096;

/// Upper bound on the copy buffer, unless one frame is larger.
const READ_BUFFER_BYTES: usize = 1 << 20;

/// Largest frame (all channels of one sample) the splitter accepts.
pub const MAX_FRAME_BYTES: usize = 1 << 20;

/// Options for a split run.
#[derive(Debug, Clone)]
pub struct SplitOptions {
    /// Multichannel input file.
    pub input: PathBuf,
    /// Directory receiving the mono files.
    pub out_dir: PathBuf,
    /// Replace existing output files instead of failing.
    pub overwrite: bool,
}

impl SplitOptions {
    /// Options writing next to `input` without overwriting.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        let input = input.into();
        let out_dir = input
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Self {
            input,
            out_dir,
            overwrite: false,
        }
    }

    /// Sets the output directory.
    pub fn with_out_dir(mut self, out_dir: impl Into<PathBuf>) -> Self {
        self.out_dir = out_dir.into();
        self
    }

    /// Sets whether existing outputs are replaced.
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Output path for the channel labelled `label`.
    pub fn output_path(&self, label: &str) -> PathBuf {
        let stem = self
            .input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "output".to_string());
        self.out_dir.join(format!("{}.{}.wav", stem, label))
    }
}

/// One written mono file.
#[derive(Debug, Clone)]
pub struct SplitOutput {
    /// Channel label, e.g. `FL`.
    pub label: String,
    /// Path of the written file.
    pub path: PathBuf,
}

/// Result of a split run.
#[derive(Debug, Clone)]
pub struct SplitReport {
    /// Header of the input file.
    pub source: Header,
    /// Header written to every output file.
    pub mono: Header,
    /// Written files, in channel order.
    pub outputs: Vec<SplitOutput>,
    /// Counters from the copy loop.
    pub stats: DemuxStats,
}

/// Counters from [`demux`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DemuxStats {
    /// Whole sample frames copied.
    pub frames: u64,
    /// Zero bytes appended to each output to reach its declared data size.
    pub padding: u64,
}

/// Splits `options.input` into one mono file per channel.
///
/// The header is checked before any output is created: bits per sample must
/// be a multiple of 8 and one frame must fit in [`MAX_FRAME_BYTES`].
///
/// # Errors
///
/// Returns the [`SplitError`] variant naming the step that failed. Outputs
/// created before a failure are left on disk.
pub fn split_file(options: &SplitOptions) -> Result<SplitReport, SplitError> {
    let input = &options.input;
    let file = File::open(input).map_err(|source| SplitError::InputRead {
        path: input.clone(),
        source,
    })?;
    let mut reader = BufReader::new(file);

    let source = parse_header(&mut reader).map_err(|source| SplitError::Header {
        path: input.clone(),
        source,
    })?;
    check_sample_layout(input, &source)?;

    let mono = derive_mono(&source);
    debug!(
        channels = source.num_channels(),
        data_size = source.data_size(),
        mono_data_size = mono.data_size(),
        "derived mono header"
    );

    fs::create_dir_all(&options.out_dir).map_err(|source| SplitError::OutputWrite {
        path: options.out_dir.clone(),
        source,
    })?;

    let outputs: Vec<SplitOutput> = channel_labels(&source)
        .into_iter()
        .map(|label| SplitOutput {
            path: options.output_path(&label),
            label,
        })
        .collect();

    let mut writers = Vec::with_capacity(outputs.len());
    for output in &outputs {
        let file = create_output(&output.path, options.overwrite)?;
        let mut writer = BufWriter::new(file);
        write_header(&mut writer, &mono).map_err(|err| SplitError::OutputWrite {
            path: output.path.clone(),
            source: match err {
                FormatError::Io(e) => e,
                other => io::Error::new(io::ErrorKind::InvalidData, other),
            },
        })?;
        writers.push(writer);
    }

    let stats = demux(&mut reader, &mut writers, &source, &mono).map_err(|err| match err {
        DemuxError::Read(source) => SplitError::InputRead {
            path: input.clone(),
            source,
        },
        DemuxError::Write { channel, source } => SplitError::OutputWrite {
            path: outputs[channel].path.clone(),
            source,
        },
        layout @ DemuxError::Layout { .. } => SplitError::UnsupportedSamples {
            path: input.clone(),
            reason: layout.to_string(),
        },
    })?;

    for (writer, output) in writers.iter_mut().zip(&outputs) {
        writer.flush().map_err(|source| SplitError::OutputWrite {
            path: output.path.clone(),
            source,
        })?;
        info!(channel = %output.label, path = %output.path.display(), "wrote mono file");
    }

    Ok(SplitReport {
        source,
        mono,
        outputs,
        stats,
    })
}

fn check_sample_layout(input: &Path, header: &Header) -> Result<(), SplitError> {
    let bits = header.bits_per_sample();
    if bits % 8 != 0 {
        return Err(SplitError::UnsupportedSamples {
            path: input.to_path_buf(),
            reason: format!("{}-bit samples, bits per sample must be a multiple of 8", bits),
        });
    }

    let frame_bytes = usize::from(header.num_channels()) * usize::from(header.bytes_per_sample());
    if frame_bytes > MAX_FRAME_BYTES {
        return Err(SplitError::UnsupportedSamples {
            path: input.to_path_buf(),
            reason: format!(
                "{}-byte frames ({} channels of {}-bit samples), the limit is {} bytes",
                frame_bytes,
                header.num_channels(),
                bits,
                MAX_FRAME_BYTES
            ),
        });
    }

    Ok(())
}

fn create_output(path: &Path, overwrite: bool) -> Result<File, SplitError> {
    let mut open = OpenOptions::new();
    open.write(true);
    if overwrite {
        open.create(true).truncate(true);
    } else {
        open.create_new(true);
    }
    open.open(path).map_err(|source| {
        if source.kind() == io::ErrorKind::AlreadyExists && !overwrite {
            SplitError::OutputExists {
                path: path.to_path_buf(),
            }
        } else {
            SplitError::OutputWrite {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

/// Errors from [`demux`].
#[derive(Debug, Error)]
pub enum DemuxError {
    /// Writer count or sample size does not match the header.
    #[error("{writers} writers for {channels} channels of {bytes_per_sample}-byte samples")]
    Layout {
        writers: usize,
        channels: usize,
        bytes_per_sample: usize,
    },

    /// The reader failed or ended before the declared frames were read.
    #[error("failed to read sample data")]
    Read(#[source] io::Error),

    /// The writer for `channel` failed.
    #[error("failed to write channel {channel}")]
    Write {
        channel: usize,
        #[source]
        source: io::Error,
    },
}

/// Frames per read for `frame_bytes`-byte frames: at most
/// [`FRAMES_PER_READ`], within [`READ_BUFFER_BYTES`] unless a single frame is
/// larger, and never more than `total_frames`.
fn frames_per_read(frame_bytes: usize, total_frames: u64) -> usize {
    let budgeted = (READ_BUFFER_BYTES / frame_bytes.max(1)).clamp(1, FRAMES_PER_READ);
    usize::try_from(total_frames).map_or(budgeted, |total| budgeted.min(total))
}

/// Copies interleaved sample data from `reader` into one writer per channel.
///
/// `reader` must be positioned at the first sample byte. Each writer receives
/// exactly `mono.data_size()` bytes; trailing bytes of a partial frame are
/// dropped and the shortfall is zero-filled.
///
/// # Errors
///
/// Fails if the sample data ends before the declared number of whole frames
/// has been read, or if a writer fails.
pub fn demux<R: Read, W: Write>(
    reader: &mut R,
    writers: &mut [W],
    source: &Header,
    mono: &Header,
) -> Result<DemuxStats, DemuxError> {
    let channels = usize::from(source.num_channels());
    let bytes_per_sample = usize::from(source.bytes_per_sample());
    if writers.len() != channels || bytes_per_sample == 0 {
        return Err(DemuxError::Layout {
            writers: writers.len(),
            channels,
            bytes_per_sample,
        });
    }

    let frame_bytes = channels * bytes_per_sample;
    let per_channel = u64::from(mono.data_size());
    let total_frames = per_channel / bytes_per_sample as u64;
    let block_frames = frames_per_read(frame_bytes, total_frames);

    let mut buffer = vec![0u8; block_frames * frame_bytes];
    let mut planes = vec![Vec::with_capacity(block_frames * bytes_per_sample); channels];
    let mut remaining = total_frames;

    while remaining > 0 {
        let frames = remaining.min(block_frames as u64) as usize;
        let chunk = &mut buffer[..frames * frame_bytes];
        reader.read_exact(chunk).map_err(|e| {
            if e.kind() == io::ErrorKind::UnexpectedEof {
                DemuxError::Read(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    format!(
                        "sample data ends {} frames before the declared {}",
                        remaining, total_frames
                    ),
                ))
            } else {
                DemuxError::Read(e)
            }
        })?;

        for plane in planes.iter_mut() {
            plane.clear();
        }
        for frame in chunk.chunks_exact(frame_bytes) {
            for (plane, sample) in planes.iter_mut().zip(frame.chunks_exact(bytes_per_sample)) {
                plane.extend_from_slice(sample);
            }
        }
        for (channel, (writer, plane)) in writers.iter_mut().zip(&planes).enumerate() {
            writer
                .write_all(plane)
                .map_err(|source| DemuxError::Write { channel, source })?;
        }

        remaining -= frames as u64;
    }

    let padding = per_channel - total_frames * bytes_per_sample as u64;
    if padding > 0 {
        warn!(
            padding,
            "data chunk is not a whole number of frames; padding each output"
        );
        let zeros = vec![0u8; padding as usize];
        for (channel, writer) in writers.iter_mut().enumerate() {
            writer
                .write_all(&zeros)
                .map_err(|source| DemuxError::Write { channel, source })?;
        }
    }

    Ok(DemuxStats {
        frames: total_frames,
        padding,
    })
}
