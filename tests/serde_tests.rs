#![cfg(feature = "serde")]

use weft::collision::SURFACE_OFFSET;
use weft::{
    ClothConfig, ClothError, ClothParameters, Collide, CollisionObject, Inflation, InflationCenter, Layout, Plane,
    PointMass, Vec3,
};

#[test]
fn config_round_trips_through_json() {
    let config: ClothConfig<f64> = ClothConfig::new(2.0, 1.0, 8, 4)
        .with_pins(vec![(0, 3), (7, 3)])
        .with_layout(Layout::Scattered);
    let json = serde_json::to_string(&config).unwrap();
    let back: ClothConfig<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

#[test]
fn parameters_load_from_json() {
    let params: ClothParameters<f64> = ClothParameters::new()
        .with_inflation(Inflation::new(0.5, InflationCenter::Fixed(Vec3::new(0.5, 0.5, 0.0))));
    let json = serde_json::to_value(&params).unwrap();
    assert_eq!(json["stiffness"], 5000.0);
    let back: ClothParameters<f64> = serde_json::from_value(json).unwrap();
    assert_eq!(back, params);
}

#[test]
fn primitives_load_from_json() {
    let plane = CollisionObject::from(Plane::new(Vec3::zero(), Vec3::new(0.0, 1.0, 0.0), 0.2).unwrap());
    let json = serde_json::to_string(&plane).unwrap();
    let back: CollisionObject<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, plane);
}

#[test]
fn loaded_plane_normal_is_normalized() {
    let json = r#"{"point":{"x":0.0,"y":0.0,"z":0.0},"normal":{"x":0.0,"y":2.0,"z":0.0},"friction":0.0}"#;
    let plane: Plane<f64> = serde_json::from_str(json).unwrap();
    assert_eq!(plane.normal(), Vec3::new(0.0, 1.0, 0.0));

    let mut pm = PointMass::new(Vec3::new(0.0, 0.5, 0.0), false);
    pm.position = Vec3::new(0.0, -0.2, 0.0);
    plane.collide(&mut pm);
    assert!((pm.position.y - SURFACE_OFFSET as f64).abs() < 1e-12);
}

#[test]
fn zero_plane_normal_is_rejected_on_load() {
    let json = r#"{"point":{"x":0.0,"y":0.0,"z":0.0},"normal":{"x":0.0,"y":0.0,"z":0.0},"friction":0.3}"#;
    let err = serde_json::from_str::<Plane<f64>>(json).unwrap_err();
    assert!(err.to_string().contains(&ClothError::DegenerateNormal.to_string()));

    let wrapped = r#"{"Plane":{"point":{"x":0.0,"y":0.0,"z":0.0},"normal":{"x":0.0,"y":0.0,"z":0.0},"friction":0.3}}"#;
    assert!(serde_json::from_str::<CollisionObject<f64>>(wrapped).is_err());
}
