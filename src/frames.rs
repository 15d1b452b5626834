use anyhow::Result;
use modlayout_core::AssetKey;
use modlayout_geom::Transform;
use modlayout_layout::TransformRecord;
use modlayout_scene::TransformSink;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Debug, Serialize)]
struct FrameLine<'a> {
    frame: u64,
    group: Option<TransformRecord>,
    modules: &'a [ModuleLine],
}

#[derive(Debug, Serialize)]
struct ModuleLine {
    index: usize,
    key: String,
    transform: TransformRecord,
}

/// Renderer stand-in that writes one JSON line per synced frame.
pub struct JsonlFrameSink {
    out: BufWriter<File>,
    frame: u64,
    group: Option<TransformRecord>,
    modules: Vec<ModuleLine>,
    error: Option<anyhow::Error>,
}

impl JsonlFrameSink {
    /// Create the log at `path`, creating parent dirs if needed.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(path)?;
        Ok(Self {
            out: BufWriter::new(file),
            frame: 0,
            group: None,
            modules: Vec::new(),
            error: None,
        })
    }

    /// Frames written so far.
    pub fn frames(&self) -> u64 {
        self.frame
    }

    /// Flush the log, surfacing the first write error of any frame.
    pub fn finish(mut self) -> Result<()> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(())
    }

    fn write_frame(&mut self) -> Result<()> {
        let line = serde_json::to_string(&FrameLine {
            frame: self.frame,
            group: self.group,
            modules: &self.modules,
        })?;
        self.out.write_all(line.as_bytes())?;
        self.out.write_all(b"\n")?;
        Ok(())
    }
}

impl TransformSink for JsonlFrameSink {
    fn sync_group(&mut self, transform: &Transform) {
        self.group = Some(TransformRecord::from(transform));
    }

    fn sync_module(&mut self, index: usize, key: &AssetKey, transform: &Transform) {
        self.modules.push(ModuleLine {
            index,
            key: key.to_string(),
            transform: TransformRecord::from(transform),
        });
    }

    fn finish_frame(&mut self) {
        if self.error.is_none() {
            if let Err(err) = self.write_frame() {
                self.error = Some(err);
            }
        }
        self.frame += 1;
        self.group = None;
        self.modules.clear();
    }
}
