//! Scene descriptions: named, shared materials and the spheres that use them.
//!
//! Scenes are read from JSON:
//!
//! ```json
//! {
//!   "materials": {
//!     "ground": { "type": "lambertian", "albedo": [0.8, 0.8, 0.0] },
//!     "chrome": { "type": "metal", "albedo": [0.8, 0.8, 0.8], "fuzz": 0.3 }
//!   },
//!   "spheres": [
//!     { "center": [0.0, -100.5, -1.0], "radius": 100.0, "material": "ground" }
//!   ]
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use lumen_math::{Color, Point3};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{HittableList, Lambertian, Material, Metal, Sphere};

/// Errors that can occur while loading a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Sphere {index} references unknown material '{name}'")]
    UnknownMaterial { index: usize, name: String },

    #[error("Sphere {index} has invalid radius {radius}")]
    InvalidRadius { index: usize, radius: f64 },
}

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// A material as written in a scene file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MaterialDesc {
    Lambertian { albedo: [f64; 3] },
    Metal { albedo: [f64; 3], fuzz: f64 },
}

impl MaterialDesc {
    fn build(&self) -> Arc<dyn Material> {
        match *self {
            MaterialDesc::Lambertian { albedo } => Arc::new(Lambertian::new(Color::from_array(albedo))),
            MaterialDesc::Metal { albedo, fuzz } => Arc::new(Metal::new(Color::from_array(albedo), fuzz)),
        }
    }
}

/// A sphere as written in a scene file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SphereDesc {
    pub center: [f64; 3],
    pub radius: f64,
    /// Name of an entry in [`SceneDesc::materials`]
    pub material: String,
}

/// A whole scene as written in a scene file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SceneDesc {
    #[serde(default)]
    pub materials: BTreeMap<String, MaterialDesc>,
    #[serde(default)]
    pub spheres: Vec<SphereDesc>,
}

impl SceneDesc {
    /// Parse a scene from a JSON string.
    pub fn from_json(json: &str) -> SceneResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a scene from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> SceneResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let desc = Self::from_json(&text)?;
        log::debug!(
            "Loaded scene {} ({} materials, {} spheres)",
            path.as_ref().display(),
            desc.materials.len(),
            desc.spheres.len()
        );
        Ok(desc)
    }

    /// Serialize the scene as pretty-printed JSON.
    pub fn to_json(&self) -> SceneResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The four-sphere demo scene: a yellow ground, a matte center sphere,
    /// and two metal spheres with different fuzz.
    pub fn demo() -> Self {
        let materials = BTreeMap::from([
            ("ground".to_string(), MaterialDesc::Lambertian { albedo: [0.8, 0.8, 0.0] }),
            ("center".to_string(), MaterialDesc::Lambertian { albedo: [0.7, 0.3, 0.3] }),
            ("left".to_string(), MaterialDesc::Metal { albedo: [0.8, 0.8, 0.8], fuzz: 0.3 }),
            ("right".to_string(), MaterialDesc::Metal { albedo: [0.8, 0.6, 0.2], fuzz: 1.0 }),
        ]);

        let sphere = |center: [f64; 3], radius: f64, material: &str| SphereDesc {
            center,
            radius,
            material: material.to_string(),
        };

        Self {
            materials,
            spheres: vec![
                sphere([0.0, -100.5, -1.0], 100.0, "ground"),
                sphere([0.0, 0.0, -1.0], 0.5, "center"),
                sphere([-1.0, 0.0, -1.0], 0.5, "left"),
                sphere([1.0, 0.0, -1.0], 0.5, "right"),
            ],
        }
    }

    /// Build the renderable world.
    ///
    /// Each named material is constructed once and shared by every sphere
    /// that references it.
    pub fn build(&self) -> SceneResult<HittableList> {
        let materials: BTreeMap<&str, Arc<dyn Material>> = self
            .materials
            .iter()
            .map(|(name, desc)| (name.as_str(), desc.build()))
            .collect();

        let mut world = HittableList::new();
        for (index, desc) in self.spheres.iter().enumerate() {
            if !desc.radius.is_finite() || desc.radius <= 0.0 {
                return Err(SceneError::InvalidRadius {
                    index,
                    radius: desc.radius,
                });
            }

            let material = materials
                .get(desc.material.as_str())
                .ok_or_else(|| SceneError::UnknownMaterial {
                    index,
                    name: desc.material.clone(),
                })?;

            world.add(Box::new(Sphere::new(
                Point3::from_array(desc.center),
                desc.radius,
                Arc::clone(material),
            )));
        }

        let unused = self
            .materials
            .keys()
            .filter(|name| !self.spheres.iter().any(|s| &s.material == *name))
            .count();
        if unused > 0 {
            log::warn!("{} material(s) are not used by any sphere", unused);
        }

        log::info!("Built scene with {} objects", world.len());
        Ok(world)
    }
}
