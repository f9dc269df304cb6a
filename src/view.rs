//! Presentation seam between cloud computation and display.

use std::io::Write;

use anyhow::Result;

use crate::WeightedTag;

/// Capabilities a display surface provides for a tag cloud.
///
/// The computation side hands a finished cloud to `render` and routes
/// tag selection events to `tag_activated`, it never builds any UI of
/// its own.
pub trait CloudView {
    /// Redraw the display from a fresh cloud, replacing whatever was
    /// shown before.
    fn render(&mut self, cloud: &[WeightedTag]) -> Result<()>;

    /// A tag in the cloud was selected.
    fn tag_activated(&mut self, tag: &str) -> Result<()>;
}

/// Plain text cloud rendering for terminals and tests.
///
/// Prints one line per tag: name, count, interpolated font size and
/// the 0..10 weight bucket.
pub struct TextView<W> {
    out: W,
    min_font_size: u32,
    max_font_size: u32,
}

impl<W: Write> TextView<W> {
    pub fn new(out: W, min_font_size: u32, max_font_size: u32) -> Self {
        TextView {
            out,
            min_font_size,
            max_font_size,
        }
    }
}

impl<W: Write> CloudView for TextView<W> {
    fn render(&mut self, cloud: &[WeightedTag]) -> Result<()> {
        for tag in cloud {
            let size = tag
                .scaled(self.min_font_size as f64, self.max_font_size as f64);
            writeln!(
                self.out,
                "{:32} {:4} {:5.1} {:2}",
                tag.name,
                tag.count,
                size,
                tag.bucket()
            )?;
        }
        Ok(())
    }

    fn tag_activated(&mut self, tag: &str) -> Result<()> {
        // Echo back a search link for the host to follow.
        writeln!(self.out, "#{tag}")?;
        Ok(())
    }
}
