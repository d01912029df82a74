use rotatez::{Rotation, RotationArg};

#[test]
fn test_right_angles_map_to_distinct_options() {
    let options: Vec<u32> = [0, 90, 180, 270]
        .iter()
        .map(|&angle| Rotation::from_degrees(angle).to_transform_options().0)
        .collect();

    for (i, a) in options.iter().enumerate() {
        for b in options.iter().skip(i + 1) {
            assert_ne!(a, b, "Transform options must be distinct per angle");
        }
    }
}

#[test]
fn test_transform_option_values() {
    assert_eq!(Rotation::Deg0.to_transform_options().0, 0x0000_0400);
    assert_eq!(Rotation::Deg90.to_transform_options().0, 0x0030_0400);
    assert_eq!(Rotation::Deg180.to_transform_options().0, 0x0060_0400);
    assert_eq!(Rotation::Deg270.to_transform_options().0, 0x0050_0400);
}

#[test]
fn test_non_right_angles_reset_the_rotation() {
    for angle in [45, 89, 91, 100, -37, 271] {
        assert_eq!(Rotation::from_degrees(angle), Rotation::Deg0);
        assert_eq!(
            Rotation::from_degrees(angle).to_transform_options(),
            Rotation::from_degrees(0).to_transform_options()
        );
    }
}

#[test]
fn test_angles_wrap_modulo_a_full_turn() {
    assert_eq!(Rotation::from_degrees(360), Rotation::Deg0);
    assert_eq!(Rotation::from_degrees(450), Rotation::Deg90);
    assert_eq!(Rotation::from_degrees(720), Rotation::Deg0);
    assert_eq!(Rotation::from_degrees(-90), Rotation::Deg270);
    assert_eq!(Rotation::from_degrees(-180), Rotation::Deg180);
}

#[test]
fn test_toggle_against_current_rotation() {
    assert_eq!(RotationArg::Toggle.resolve(0.0), Rotation::Deg90);
    assert_eq!(RotationArg::Toggle.resolve(90.0), Rotation::Deg0);
    assert_eq!(RotationArg::Toggle.resolve(180.0), Rotation::Deg0);
    assert_eq!(RotationArg::Toggle.resolve(270.0), Rotation::Deg0);
}

#[test]
fn test_degree_requests_ignore_current_rotation() {
    assert_eq!(RotationArg::Degrees(270).resolve(90.0), Rotation::Deg270);
    assert_eq!(RotationArg::Degrees(0).resolve(180.0), Rotation::Deg0);
}

#[test]
fn test_rotation_argument_parsing() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!("1".parse::<RotationArg>()?, RotationArg::Toggle);
    assert_eq!("0".parse::<RotationArg>()?, RotationArg::Degrees(0));
    assert_eq!("90".parse::<RotationArg>()?, RotationArg::Degrees(90));
    assert_eq!("270".parse::<RotationArg>()?, RotationArg::Degrees(270));
    assert_eq!("-90".parse::<RotationArg>()?, RotationArg::Degrees(-90));

    assert!("ninety".parse::<RotationArg>().is_err());

    Ok(())
}
