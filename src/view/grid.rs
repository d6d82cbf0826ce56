// Entity grids (camera feeds, zone analytics). Every render is a full replace.

use super::{Card, Mount, RenderTarget};
use crate::error::RenderError;
use crate::models::{Camera, Zone};

/// Clear `mount` and append one card per item, in input order.
/// The template alone decides what a card shows.
pub fn render<R, T, F>(target: &mut R, mount: Mount, items: &[T], template: F) -> Result<(), RenderError>
where
    R: RenderTarget + ?Sized,
    F: Fn(&T) -> Card,
{
    let cards = items.iter().map(template).collect();
    target.replace_children(mount, cards)
}

pub fn camera_card(camera: &Camera) -> Card {
    Card {
        title: camera.name.clone(),
        image: Some(camera.stream_url.clone()),
        lines: Vec::new(),
    }
}

pub fn zone_card(zone: &Zone) -> Card {
    Card {
        title: zone.name.clone(),
        image: None,
        lines: vec![
            format!("People: {}", zone.count),
            format!("Dwell: {}s", zone.dwell_time),
        ],
    }
}
