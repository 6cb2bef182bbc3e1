//! Executes commands against a scene and writes canvas images.

use std::path::{Path, PathBuf};

use log::info;

use super::{file_stem, parse_numbered, Command};
use crate::canvas::Canvas;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::PngEncoder;
use crate::scene::Scene;

/// Stateful command executor.
///
/// Holds the current scene (items and pen) and canvas. `saveCanvas`
/// repaints the whole scene and writes `NAME.<ext>` into the output
/// directory.
#[derive(Debug)]
pub struct Interpreter {
    config: Config,
    output_dir: PathBuf,
    scene: Scene,
    canvas: Canvas,
    saved: Vec<PathBuf>,
}

impl Interpreter {
    /// Create an interpreter with the configured initial canvas.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if the configured canvas is empty.
    pub fn new(output_dir: impl Into<PathBuf>, config: Config) -> Result<Self> {
        let canvas = Self::make_canvas(&config, config.canvas.width, config.canvas.height)?;
        Ok(Self {
            output_dir: output_dir.into(),
            scene: Scene::new(),
            canvas,
            saved: Vec::new(),
            config,
        })
    }

    fn make_canvas(config: &Config, width: u32, height: u32) -> Result<Canvas> {
        Ok(Canvas::new(width, height, config.canvas.background_color())?
            .with_samples_per_segment(config.curve.samples_per_segment))
    }

    /// Current scene.
    #[must_use]
    pub const fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Current canvas, as last painted.
    #[must_use]
    pub const fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Directory images are written to.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Paths written so far, in order.
    #[must_use]
    pub fn saved(&self) -> &[PathBuf] {
        &self.saved
    }

    /// Execute one command.
    ///
    /// # Errors
    ///
    /// Fails for unknown item identifiers, unsupported transforms, zero
    /// canvas dimensions, save names that are not plain file names, and
    /// I/O or encoding failures on save.
    pub fn execute(&mut self, command: &Command) -> Result<()> {
        match command {
            Command::ResetCanvas { width, height } => {
                info!("reset canvas to {width}x{height}");
                self.canvas = Self::make_canvas(&self.config, *width, *height)?;
                self.scene.clear();
            }
            Command::SaveCanvas { name } => {
                let stem = file_stem(name)?;
                let path = self
                    .output_dir
                    .join(format!("{stem}.{}", self.config.output.extension));
                self.canvas.paint(&self.scene)?;
                PngEncoder::write_to_file(self.canvas.framebuffer(), &path)?;
                info!("saved {} items to {}", self.scene.len(), path.display());
                self.saved.push(path);
            }
            Command::SetColor(color) => self.scene.set_pen(*color),
            Command::Draw { id, primitive } => self.scene.insert(id.clone(), primitive.clone()),
            Command::Translate { id, dx, dy } => self.scene.translate(id, *dx, *dy)?,
            Command::Rotate { id, pivot, degrees } => self.scene.rotate(id, *pivot, *degrees)?,
            Command::Scale { id, pivot, factor } => self.scene.scale(id, *pivot, *factor)?,
            Command::Clip {
                id,
                window,
                algorithm,
            } => self.scene.clip(id, *window, *algorithm)?,
        }
        Ok(())
    }

    /// Execute commands in order, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// See [`Interpreter::execute`].
    pub fn run(&mut self, commands: &[Command]) -> Result<()> {
        commands.iter().try_for_each(|command| self.execute(command))
    }

    /// Parse and execute a whole script.
    ///
    /// The script is parsed completely before anything runs, so a syntax
    /// error never leaves partial output behind.
    ///
    /// # Errors
    ///
    /// [`Error::ScriptParse`] for malformed lines, [`Error::ScriptExecution`]
    /// wrapping the failure of a well-formed command.
    pub fn run_script(&mut self, source: &str) -> Result<()> {
        for (line, command) in parse_numbered(source)? {
            self.execute(&command).map_err(|e| Error::ScriptExecution {
                line,
                source: Box::new(e),
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use crate::geometry::Point;

    fn interpreter(dir: &Path) -> Interpreter {
        Interpreter::new(dir, Config::default()).unwrap()
    }

    #[test]
    fn test_initial_canvas_from_config() {
        let mut config = Config::default();
        config.canvas.width = 32;
        config.canvas.height = 16;
        let interp = Interpreter::new("out", config).unwrap();
        assert_eq!((interp.canvas().width(), interp.canvas().height()), (32, 16));
        assert_eq!(interp.output_dir(), Path::new("out"));
    }

    #[test]
    fn test_reset_clears_items_keeps_pen() {
        let dir = tempfile::tempdir().unwrap();
        let mut interp = interpreter(dir.path());
        interp
            .run_script("setColor 255 0 0\ndrawLine a 0 0 5 5 DDA\nresetCanvas 20 10\n")
            .unwrap();

        assert!(interp.scene().is_empty());
        assert_eq!(interp.scene().pen(), Rgba::RED);
        assert_eq!(interp.canvas().width(), 20);
    }

    #[test]
    fn test_save_writes_named_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut interp = interpreter(dir.path());
        interp
            .run_script("resetCanvas 10 10\ndrawLine a 0 0 9 0 Bresenham\nsaveCanvas first\n")
            .unwrap();

        let expected = dir.path().join("first.png");
        assert_eq!(interp.saved(), [expected.clone()]);
        assert!(expected.exists());
        assert_eq!(interp.canvas().pixel(Point::new(9, 0)), Some(Rgba::BLACK));
    }

    #[test]
    fn test_unknown_item_reports_line() {
        let dir = tempfile::tempdir().unwrap();
        let mut interp = interpreter(dir.path());
        let err = interp
            .run_script("resetCanvas 10 10\n\ntranslate ghost 1 1\n")
            .unwrap_err();

        match err {
            Error::ScriptExecution { line, source } => {
                assert_eq!(line, 3);
                assert!(matches!(*source, Error::UnknownItem(ref id) if id == "ghost"));
            }
            other => panic!("expected execution error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_error_runs_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut interp = interpreter(dir.path());
        let result = interp.run_script("resetCanvas 10 10\nsaveCanvas a\nbogus\n");

        assert!(matches!(result, Err(Error::ScriptParse { line: 3, .. })));
        assert!(interp.saved().is_empty());
        assert!(!dir.path().join("a.png").exists());
    }

    #[test]
    fn test_zero_canvas_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut interp = interpreter(dir.path());
        let result = interp.execute(&Command::ResetCanvas { width: 0, height: 5 });
        assert!(matches!(result, Err(Error::InvalidDimensions { .. })));
    }

    #[test]
    fn test_save_rejects_escaping_name() {
        let root = tempfile::tempdir().unwrap();
        let out = root.path().join("out");
        std::fs::create_dir(&out).unwrap();
        let mut interp = interpreter(&out);

        let result = interp.execute(&Command::SaveCanvas {
            name: "../escape".into(),
        });

        assert!(matches!(result, Err(Error::InvalidInput(_))));
        assert!(interp.saved().is_empty());
        assert!(!root.path().join("escape.png").exists());
        assert_eq!(std::fs::read_dir(&out).unwrap().count(), 0);
    }
}
