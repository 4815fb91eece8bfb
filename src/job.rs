use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::foundation::core::Fps;
use crate::foundation::error::{HoloreelError, HoloreelResult};
use crate::render::colormap::Colormap;
use crate::stack::model::{ChannelSelect, ImageStack};
use crate::video::{AnimateOpts, AnimateStats, animate_to_mp4};

/// JSON-facing description of one animation job.
///
/// `fps` is the only required key; everything else falls back to the defaults below. The
/// `option` field only accepts the two channel names, so a typo fails at parse time
/// instead of silently rendering the wrong plane.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct VideoJob {
    /// Output frames per second.
    pub fps: u32,
    /// Directory the MP4 is written into (default `.`).
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Output file name without the `.mp4` extension (default `animation`).
    #[serde(default = "default_fname")]
    pub fname: String,
    /// Channel rendered for split or native-complex stacks (default `Real`).
    #[serde(default)]
    pub option: ChannelSelect,
    /// Use one shared color range across all frames (default off).
    #[serde(default)]
    pub autoscale: bool,
    /// Colormap applied to normalized samples (default `viridis`).
    #[serde(default)]
    pub colormap: Colormap,
    /// Square up-scale factor per sample (default 1).
    #[serde(default = "default_pixel_scale")]
    pub pixel_scale: u32,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_fname() -> String {
    "animation".to_owned()
}

fn default_pixel_scale() -> u32 {
    1
}

impl VideoJob {
    /// Parse a job from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> HoloreelResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| HoloreelError::validation(format!("parse video job JSON: {e}")))
    }

    /// Parse a job from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> HoloreelResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            HoloreelError::validation(format!("open video job JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Validate job fields that serde cannot check.
    pub fn validate(&self) -> HoloreelResult<()> {
        if self.fps == 0 {
            return Err(HoloreelError::validation("job fps must be >= 1"));
        }
        if self.fname.is_empty() {
            return Err(HoloreelError::validation("job fname must be non-empty"));
        }
        if self.pixel_scale == 0 {
            return Err(HoloreelError::validation("job pixel_scale must be >= 1"));
        }
        Ok(())
    }

    /// The MP4 path this job writes to.
    pub fn output_path(&self) -> PathBuf {
        crate::video::output_path(&self.data_dir, &self.fname)
    }

    /// Map the job onto pipeline options.
    pub fn to_opts(&self) -> HoloreelResult<AnimateOpts> {
        let mut opts = AnimateOpts::new(Fps::from_hz(self.fps)?);
        opts.channel = self.option;
        opts.autoscale = self.autoscale;
        opts.colormap = self.colormap;
        opts.pixel_scale = self.pixel_scale;
        Ok(opts)
    }
}

/// Run a [`VideoJob`] against a stack, writing the MP4 it describes.
pub fn animate_job(stack: &ImageStack, job: &VideoJob) -> HoloreelResult<AnimateStats> {
    job.validate()?;
    animate_to_mp4(stack, &job.data_dir, &job.fname, &job.to_opts()?)
}

#[cfg(test)]
#[path = "../tests/unit/job.rs"]
mod tests;
