use crate::dimension::{DimensionSource, Dimensions};
use std::fmt::Write;
use unicode_width::UnicodeWidthStr;

/// A span to underline, in character indexes (end exclusive).
struct IncludedSpan {
    start: usize,
    end: usize,
    label: String,
}

/// Renders a title with the extracted spans underlined beneath it.
///
/// ```text
/// Wire 2.5X100mm
///      ╰─╯Diameter(2.5)
///         ╰Separator('X')
///          ╰─╯Length(100)
/// ```
pub struct TitleDisplay<'a> {
    title: &'a str,
    include_spans: Vec<IncludedSpan>,
}

impl<'a> std::fmt::Display for TitleDisplay<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // display column at each character boundary
        let mut columns = Vec::with_capacity(self.title.len() + 1);
        columns.push(0);
        for (idx, ch) in self.title.char_indices() {
            let end = idx + ch.len_utf8();
            columns.push(UnicodeWidthStr::width(&self.title[..end]));
        }

        f.write_str(self.title)?;

        for span in self.include_spans.iter() {
            let Some(&start_col) = columns.get(span.start) else {
                continue;
            };
            let end_col = columns.get(span.end).copied().unwrap_or(start_col);

            f.write_char('\n')?;
            for _ in 0..start_col {
                f.write_char(' ')?;
            }

            f.write_char('╰')?;

            let char_len = end_col.saturating_sub(start_col);
            for _ in (start_col + 1)..end_col.saturating_sub(1) {
                f.write_char('─')?;
            }

            if char_len > 1 {
                f.write_char('╯')?;
            }

            f.write_str(&span.label)?;
        }

        Ok(())
    }
}

impl<'a> TitleDisplay<'a> {
    pub fn new(title: &'a str) -> Self {
        TitleDisplay {
            title,
            include_spans: Vec::new(),
        }
    }

    /// Underline characters `start..end` with `label`.
    pub fn include_span(&mut self, start: usize, end: usize, label: impl Into<String>) {
        self.include_spans.push(IncludedSpan {
            start,
            end,
            label: label.into(),
        });
    }

    /// Underline the diameter, the pattern anchor and the length, left to right.
    pub fn include_dimensions(&mut self, dimensions: &Dimensions) {
        if let Some(diameter) = dimensions.diameter {
            self.include_span(
                diameter.start,
                diameter.end,
                format!("Diameter({})", diameter.value),
            );
        }

        let anchor = match &dimensions.source {
            Some(DimensionSource::Separator { at, separator }) => {
                Some((*at, *at + 1, format!("Separator({:?})", separator)))
            }
            Some(DimensionSource::UnitMarker { at, marker }) => Some((
                *at,
                *at + marker.chars().count(),
                format!("UnitMarker({:?})", marker),
            )),
            None => None,
        };

        let length = dimensions
            .length
            .map(|length| (length.start, length.end, format!("Length({})", length.value)));

        let mut rest: Vec<_> = anchor.into_iter().chain(length).collect();
        rest.sort_by_key(|(start, _, _)| *start);
        for (start, end, label) in rest {
            self.include_span(start, end, label);
        }
    }

    /// Takes self
    pub fn with_dimensions(mut self, dimensions: &Dimensions) -> Self {
        self.include_dimensions(dimensions);
        self
    }
}
