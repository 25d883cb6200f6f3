use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, PolygonPrimitive, RectPrimitive, TextPrimitive,
};

pub const RENDER_FRAME_JSON_SCHEMA_V1: u32 = 1;

/// One draw command. Backends paint items in frame order, so later items
/// cover earlier ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawItem {
    Line(LinePrimitive),
    Rect(RectPrimitive),
    Polygon(PolygonPrimitive),
    Circle(CirclePrimitive),
    Text(TextPrimitive),
}

impl DrawItem {
    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::Line(line) => line.validate(),
            Self::Rect(rect) => rect.validate(),
            Self::Polygon(polygon) => polygon.validate(),
            Self::Circle(circle) => circle.validate(),
            Self::Text(text) => text.validate(),
        }
    }
}

macro_rules! impl_draw_item_from {
    ($($primitive:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$primitive> for DrawItem {
                fn from(primitive: $primitive) -> Self {
                    Self::$variant(primitive)
                }
            }
        )*
    };
}

impl_draw_item_from!(
    LinePrimitive => Line,
    RectPrimitive => Rect,
    PolygonPrimitive => Polygon,
    CirclePrimitive => Circle,
    TextPrimitive => Text,
);

/// Backend-agnostic scene for one draw pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub background: Color,
    pub items: Vec<DrawItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct RenderFrameJsonContractV1 {
    schema_version: u32,
    frame: RenderFrame,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            background: Color::WHITE,
            items: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    pub fn push(&mut self, item: DrawItem) {
        self.items.push(item);
    }

    pub fn lines(&self) -> impl Iterator<Item = &LinePrimitive> {
        self.items.iter().filter_map(|item| match item {
            DrawItem::Line(line) => Some(line),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = &RectPrimitive> {
        self.items.iter().filter_map(|item| match item {
            DrawItem::Rect(rect) => Some(rect),
            _ => None,
        })
    }

    pub fn polygons(&self) -> impl Iterator<Item = &PolygonPrimitive> {
        self.items.iter().filter_map(|item| match item {
            DrawItem::Polygon(polygon) => Some(polygon),
            _ => None,
        })
    }

    pub fn circles(&self) -> impl Iterator<Item = &CirclePrimitive> {
        self.items.iter().filter_map(|item| match item {
            DrawItem::Circle(circle) => Some(circle),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.items.iter().filter_map(|item| match item {
            DrawItem::Text(text) => Some(text),
            _ => None,
        })
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        self.background.validate()?;
        for item in &self.items {
            item.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = RenderFrameJsonContractV1 {
            schema_version: RENDER_FRAME_JSON_SCHEMA_V1,
            frame: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize render frame contract v1: {e}"))
        })
    }

    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(frame) = serde_json::from_str::<RenderFrame>(input) {
            return Ok(frame);
        }
        let payload: RenderFrameJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse render frame json payload: {e}"))
        })?;
        if payload.schema_version != RENDER_FRAME_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported render frame schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.frame)
    }
}
