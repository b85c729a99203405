//! Supports reading the manipulator description from YAML file (optional)

use std::path::Path;
use serde::Deserialize;
use serde_saphyr::Options;

use crate::kinematic_traits::LinkId;
use crate::link::{Link, Orientation};
use crate::manipulator::Manipulator;
use crate::parameter_error::ParameterError;

#[derive(Deserialize, Default, Clone, Copy)]
#[serde(rename_all = "lowercase")]
enum Kind {
    #[default]
    Plain,
    Gripper,
    Camera,
}

#[derive(Deserialize)]
struct LinkEntry {
    pub id: LinkId,
    pub prev: LinkId,
    pub length: f64,
    pub pitch: f64,
    #[serde(default)]
    pub yaw: f64,
    #[serde(default)]
    pub roll: f64,
    #[serde(default)]
    pub kind: Kind,
}

#[derive(Deserialize)]
struct Root {
    #[serde(default)]
    pub min_link_distance: Option<f64>,
    pub links: Vec<LinkEntry>,
}

impl Manipulator {
    /// Read the manipulator from YAML file. YAML file like this is supported:
    /// ```yaml
    /// min_link_distance: 0.1
    /// links:
    ///   - id: 1
    ///     prev: 0
    ///     length: 1.0
    ///     pitch: deg(45.0)
    ///     yaw: 0.0
    ///   - id: 2
    ///     prev: 1
    ///     length: 0.2
    ///     pitch: 1.5707963
    ///     kind: gripper
    /// ```
    /// Angles are in radians unless given as deg(angle). Yaw, roll, kind (plain, gripper
    /// or camera) and min_link_distance are optional.
    ///
    /// YAML extension to parse the deg(angle) function is supported (serde_saphyr).
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ParameterError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, ParameterError> {
        let root: Root = serde_saphyr::from_str_with_options(
            contents,
            Options { angle_conversions: true, ..Default::default() }
        ).map_err(|e| ParameterError::ParseError(format!("{}", e)))?;

        let mut manipulator = Manipulator::new();
        if let Some(min_link_distance) = root.min_link_distance {
            manipulator = manipulator.with_min_link_distance(min_link_distance)?;
        }

        for entry in &root.links {
            manipulator.add_link(to_link(entry)?)?;
        }
        Ok(manipulator)
    }
}

fn to_link(entry: &LinkEntry) -> Result<Link, ParameterError> {
    for (name, val) in [("pitch", entry.pitch), ("yaw", entry.yaw), ("roll", entry.roll)] {
        if !val.is_finite() {
            return Err(ParameterError::ParseError(format!(
                "{} of link {} must be finite (got {})", name, entry.id, val
            )));
        }
    }

    let link = match entry.kind {
        Kind::Plain => Link::new(entry.id, entry.length, entry.prev),
        Kind::Gripper => Link::gripper(entry.id, entry.length, entry.prev),
        Kind::Camera => Link::camera(entry.id, entry.length, entry.prev),
    };
    Ok(link.with_orientation(Orientation::new(entry.pitch, entry.yaw, entry.roll)))
}
