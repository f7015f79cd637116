//! Map centering for the geographic tab.

use crate::schema::{Client, Prospect};

/// Default center (São Paulo) used when no marker has usable coordinates.
pub const FALLBACK_CENTER: (f64, f64) = (-23.55, -46.64);
/// Zoom used with the fallback center (wide view).
pub const FALLBACK_ZOOM: u8 = 8;
/// Zoom used when centering on actual markers (regional view).
pub const REGIONAL_ZOOM: u8 = 6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    pub center: (f64, f64),
    pub zoom: u8,
}

/// Gathers the coordinates of every plottable marker: clients with usable
/// coordinates plus all prospects. Missing or sentinel client coordinates
/// and non-finite prospect coordinates are excluded here, before any
/// averaging happens.
pub fn collect_coords(clients: &[Client], prospects: &[Prospect]) -> Vec<(f64, f64)> {
    let mut coords: Vec<(f64, f64)> = clients.iter().filter_map(Client::coords).collect();
    coords.extend(
        prospects
            .iter()
            .filter(|p| p.latitude.is_finite() && p.longitude.is_finite())
            .map(|p| (p.latitude, p.longitude)),
    );
    coords
}

/// Computes the view for a set of marker coordinates: the arithmetic mean
/// of latitudes and longitudes at regional zoom, or the fixed fallback when
/// there is nothing to plot.
pub fn map_view(coords: &[(f64, f64)]) -> MapView {
    if coords.is_empty() {
        return MapView {
            center: FALLBACK_CENTER,
            zoom: FALLBACK_ZOOM,
        };
    }

    let n = coords.len() as f64;
    let lat = coords.iter().map(|(lat, _)| lat).sum::<f64>() / n;
    let lon = coords.iter().map(|(_, lon)| lon).sum::<f64>() / n;
    MapView {
        center: (lat, lon),
        zoom: REGIONAL_ZOOM,
    }
}
