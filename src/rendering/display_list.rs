//! Recording drawing sink
//!
//! A `DisplayList` captures every primitive a theme issues instead of
//! rasterizing it. The inspection CLI prints it as JSON and the tests compare
//! recorded commands directly.

use super::sink::{DrawingSink, FillRule};
use bevy_color::Color;
use kurbo::{Affine, BezPath, Rect};
use serde::{Serialize, Serializer};

/// One recorded paint primitive
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        #[serde(serialize_with = "serialize_color")]
        color: Color,
        transform: Affine,
    },
    FillPath {
        #[serde(serialize_with = "serialize_path")]
        path: BezPath,
        rule: FillRule,
        #[serde(serialize_with = "serialize_color")]
        color: Color,
        transform: Affine,
    },
}

impl DrawCommand {
    /// Color the command paints with
    pub fn color(&self) -> Color {
        match self {
            DrawCommand::FillRect { color, .. } | DrawCommand::FillPath { color, .. } => *color,
        }
    }

    /// Area the command may touch, before the transform is applied
    pub fn bounding_box(&self) -> Rect {
        match self {
            DrawCommand::FillRect { rect, .. } => *rect,
            DrawCommand::FillPath { path, .. } => kurbo::Shape::bounding_box(path),
        }
    }
}

/// Drawing sink that records commands in issue order
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    pub fn to_json_pretty(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(&self.commands)?)
    }
}

impl DrawingSink for DisplayList {
    fn fill_rect(&mut self, rect: Rect, color: Color, transform: Affine) {
        self.commands.push(DrawCommand::FillRect {
            rect,
            color,
            transform,
        });
    }

    fn fill_path(&mut self, path: &BezPath, rule: FillRule, color: Color, transform: Affine) {
        self.commands.push(DrawCommand::FillPath {
            path: path.clone(),
            rule,
            color,
            transform,
        });
    }
}

fn serialize_color<S: Serializer>(color: &Color, serializer: S) -> Result<S::Ok, S::Error> {
    let srgba = color.to_srgba();
    [srgba.red, srgba.green, srgba.blue, srgba.alpha].serialize(serializer)
}

// SVG path data keeps the JSON readable
fn serialize_path<S: Serializer>(path: &BezPath, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.to_svg())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_issue_order() {
        let mut list = DisplayList::new();
        let red = Color::srgb(1.0, 0.0, 0.0);
        let blue = Color::srgb(0.0, 0.0, 1.0);

        list.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), red, Affine::IDENTITY);
        list.fill_rect(Rect::new(5.0, 5.0, 8.0, 8.0), blue, Affine::IDENTITY);

        assert_eq!(list.len(), 2);
        assert_eq!(list.commands()[0].color(), red);
        assert_eq!(list.commands()[1].color(), blue);
        assert_eq!(
            list.commands()[1].bounding_box(),
            Rect::new(5.0, 5.0, 8.0, 8.0)
        );
    }

    #[test]
    fn test_recording_through_mut_reference() {
        fn paint<S: DrawingSink>(mut sink: S) {
            sink.fill_rect(
                Rect::new(0.0, 0.0, 1.0, 1.0),
                Color::BLACK,
                Affine::IDENTITY,
            );
        }

        let mut list = DisplayList::new();
        paint(&mut list);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_json_output() {
        let mut list = DisplayList::new();
        list.fill_rect(
            Rect::new(0.0, 0.0, 100.0, 40.0),
            Color::srgb(1.0, 0.5, 0.0),
            Affine::IDENTITY,
        );

        let json = list.to_json_pretty().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let command = &value[0];
        assert_eq!(command["op"], "fill_rect");
        assert_eq!(command["color"][0], 1.0);
        assert_eq!(command["color"][1], 0.5);
        assert_eq!(command["color"][3], 1.0);
    }

    #[test]
    fn test_clear() {
        let mut list = DisplayList::new();
        list.fill_path(
            &BezPath::new(),
            FillRule::EvenOdd,
            Color::WHITE,
            Affine::IDENTITY,
        );
        assert!(!list.is_empty());
        list.clear();
        assert!(list.is_empty());
    }
}
