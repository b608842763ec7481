use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use glint_core::{RenderModeName, SceneDescription};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Phong,
    /// Greyscale depth buffer
    Zbuffer,
    /// Surface normals as colors
    Normal,
    Gooch,
}

impl From<ModeArg> for RenderModeName {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Phong => RenderModeName::Phong,
            ModeArg::Zbuffer => RenderModeName::Zbuffer,
            ModeArg::Normal => RenderModeName::Normal,
            ModeArg::Gooch => RenderModeName::Gooch,
        }
    }
}

/// Render a JSON scene description to a PNG image.
#[derive(Parser, Debug)]
#[command(name = "glint", version)]
pub struct Args {
    /// Scene description file
    pub scene: PathBuf,

    #[arg(short, long)]
    /// Output image, defaults to the scene path with a .png extension
    pub output: Option<PathBuf>,

    #[arg(long, value_enum)]
    /// Override the scene's render mode
    pub mode: Option<ModeArg>,

    #[arg(long)]
    /// Override the antialiasing factor (samples per pixel along each axis)
    pub aa: Option<u32>,

    #[arg(long, overrides_with = "no_shadows")]
    pub shadows: bool,
    #[arg(long, overrides_with = "shadows")]
    pub no_shadows: bool,

    #[arg(long, overrides_with = "no_reflections")]
    pub reflections: bool,
    #[arg(long, overrides_with = "reflections")]
    pub no_reflections: bool,

    #[arg(long)]
    /// Override the maximum number of reflection bounces
    pub max_depth: Option<u32>,
}

impl Args {
    /// Where the rendered image goes.
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.scene.with_extension("png"))
    }

    /// Apply command-line overrides on top of the scene file's settings.
    pub fn apply(&self, desc: &mut SceneDescription) {
        if let Some(mode) = self.mode {
            desc.render_mode = mode.into();
        }
        if let Some(aa) = self.aa {
            desc.aa = aa;
        }
        if let Some(shadows) = flag(self.shadows, self.no_shadows) {
            desc.shadows = shadows;
        }
        if let Some(reflections) = flag(self.reflections, self.no_reflections) {
            desc.reflections = reflections;
        }
        if let Some(depth) = self.max_depth {
            desc.max_depth = depth;
        }
    }
}

fn flag(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}
