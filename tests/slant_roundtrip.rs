//! End-to-end geometry check: a slant measurement resolved to geodetic
//! coordinates must re-derive, through the forward geometry, into the slant
//! values it came from.

use minsep::geodesy::{site_rotation, site_translation, GeodeticPosition};
use minsep::matrix::Matrix;
use minsep::radar::{RadarSlant, SiteCatalog};

/// Forward geometry: geodetic position → site-local (east, north, up).
fn to_site_local(site_location: &GeodeticPosition, target: &GeodeticPosition) -> (f64, f64, f64) {
    let rotation = site_rotation(site_location);
    let translation = site_translation(site_location);

    let ecef = target.to_geocentric();
    let input = Matrix::from([ecef.x, ecef.y, ecef.z]);
    let local = rotation
        .multiply(&input.subtract(&translation).unwrap())
        .unwrap();

    (local.at(0, 0), local.at(1, 0), local.at(2, 0))
}

#[test]
fn slant_resolution_inverts_the_forward_geometry() {
    let site = SiteCatalog::default().resolve(0x14, 0x81).unwrap();
    let slant = RadarSlant {
        range: 10_000.0,
        azimuth: 45.0,
        height: 3000.0,
    };

    let geodetic = site.slant_to_geodetic(&slant).unwrap();

    // Sanity: the aircraft is northeast of the site, above it.
    assert!(geodetic.latitude > site.location().latitude);
    assert!(geodetic.longitude > site.location().longitude);
    assert!(geodetic.altitude > site.location().altitude);

    let (east, north, up) = to_site_local(site.location(), &geodetic);

    let range = (east * east + north * north + up * up).sqrt();
    let azimuth = east.atan2(north).to_degrees();

    assert!(
        (range - slant.range).abs() < 0.5,
        "range: {range} vs {}",
        slant.range
    );
    assert!(
        (azimuth - slant.azimuth).abs() < 0.01,
        "azimuth: {azimuth} vs {}",
        slant.azimuth
    );
}

#[test]
fn resolved_height_tracks_the_measured_height() {
    let site = SiteCatalog::default().resolve(0x14, 0x81).unwrap();

    for (range, height) in [(8_000.0, 1500.0), (15_000.0, 4000.0), (30_000.0, 9000.0)] {
        let geodetic = site
            .slant_to_geodetic(&RadarSlant {
                range,
                azimuth: 120.0,
                height,
            })
            .unwrap();
        // The elevation-recovery formula is built so the resolved geodetic
        // altitude stays close to the measured height.
        assert!(
            (geodetic.altitude - height).abs() < 100.0,
            "altitude {} for measured height {height}",
            geodetic.altitude
        );
    }
}
