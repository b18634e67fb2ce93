use anyhow::{Context, Result};
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn is_gzip(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("gz")
}

/// Open `path` for reading; `-` is stdin and `.gz` files are decompressed.
pub fn open_reader(path: &Path) -> Result<Box<dyn BufRead + Send>> {
    if is_stdio(path) {
        return Ok(Box::new(BufReader::new(io::stdin())));
    }

    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;

    if is_gzip(path) {
        let decoder = MultiGzDecoder::new(file);
        Ok(Box::new(BufReader::with_capacity(1 << 20, decoder)))
    } else {
        Ok(Box::new(BufReader::with_capacity(1 << 20, file)))
    }
}

/// Output sink returned by [`create_writer`]. Call [`OutputWriter::finish`] once
/// everything is written so that flush and gzip trailer errors are reported.
pub enum OutputWriter {
    Plain(BufWriter<Box<dyn Write + Send>>),
    Gzip(BufWriter<GzEncoder<File>>),
}

impl OutputWriter {
    pub fn finish(self) -> Result<()> {
        match self {
            OutputWriter::Plain(mut writer) => writer.flush()?,
            OutputWriter::Gzip(writer) => {
                let encoder = writer.into_inner().map_err(|e| e.into_error())?;
                encoder.finish()?.flush()?;
            }
        }
        Ok(())
    }
}

impl Write for OutputWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            OutputWriter::Plain(w) => w.write(buf),
            OutputWriter::Gzip(w) => w.write(buf),
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        match self {
            OutputWriter::Plain(w) => w.write_all(buf),
            OutputWriter::Gzip(w) => w.write_all(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            OutputWriter::Plain(w) => w.flush(),
            OutputWriter::Gzip(w) => w.flush(),
        }
    }
}

/// Create `path` for writing; `-` is stdout and `.gz` files are compressed.
pub fn create_writer(path: &Path) -> Result<OutputWriter> {
    if is_stdio(path) {
        let stdout: Box<dyn Write + Send> = Box::new(io::stdout());
        return Ok(OutputWriter::Plain(BufWriter::new(stdout)));
    }

    let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;

    if is_gzip(path) {
        let encoder = GzEncoder::new(file, Compression::default());
        Ok(OutputWriter::Gzip(BufWriter::with_capacity(1 << 20, encoder)))
    } else {
        let file: Box<dyn Write + Send> = Box::new(file);
        Ok(OutputWriter::Plain(BufWriter::with_capacity(1 << 20, file)))
    }
}
