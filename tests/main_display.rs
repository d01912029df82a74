use rotatez::{
    Bounds, DisplayError, DisplayId, DisplayProperties, DisplaySet, Position, Resolution,
};

fn display(id: u32, x: i32, y: i32, width: i32, height: i32, main: bool) -> DisplayProperties {
    DisplayProperties {
        id: DisplayId(id),
        unit: 0,
        resolution: Resolution::new(width as u32, height as u32),
        bounds: Bounds::new(Position::new(x, y), Position::new(x + width, y + height)),
        rotation: 0.0,
        active: true,
        main,
        builtin: false,
    }
}

#[test]
fn test_origin_moves_put_the_target_at_the_origin() -> Result<(), Box<dyn std::error::Error>> {
    let _ = env_logger::builder().is_test(true).try_init();

    let display_set = DisplaySet::new(vec![
        display(0x04280a80, 0, 0, 1920, 1080, true),
        display(0x2b2c5d21, 1920, 0, 2560, 1440, false),
        display(0x3f003f00, -500, 200, 1024, 768, false),
    ]);

    let moves = display_set.origin_moves_to(DisplayId(0x2b2c5d21))?;
    assert_eq!(moves.len(), 3, "Every display in the set gets a move");

    let origin_of = |id: u32| {
        moves
            .iter()
            .find(|m| m.id == DisplayId(id))
            .map(|m| m.origin)
            .unwrap()
    };

    assert_eq!(origin_of(0x2b2c5d21), Position::new(0, 0));
    assert_eq!(origin_of(0x04280a80), Position::new(-1920, 0));
    assert_eq!(origin_of(0x3f003f00), Position::new(-2420, 200));

    Ok(())
}

#[test]
fn test_every_display_shifts_by_the_same_delta() -> Result<(), Box<dyn std::error::Error>> {
    let display_set = DisplaySet::new(vec![
        display(0x04280a80, 0, 0, 1920, 1080, true),
        display(0x2b2c5d21, 1920, -300, 2560, 1440, false),
    ]);

    let moves = display_set.origin_moves_to(DisplayId(0x2b2c5d21))?;

    let mut deltas = Vec::new();
    for origin_move in &moves {
        let before = display_set
            .get(origin_move.id)
            .map(|d| d.bounds().min)
            .unwrap();
        deltas.push(origin_move.origin - before);
    }

    assert!(
        deltas.windows(2).all(|pair| pair[0] == pair[1]),
        "All displays must shift by the same delta, got {:?}",
        deltas
    );

    Ok(())
}

#[test]
fn test_inactive_displays_are_moved_too() -> Result<(), Box<dyn std::error::Error>> {
    let mut inactive = display(0x3f003f00, 4480, 0, 1024, 768, false);
    inactive.active = false;

    let display_set = DisplaySet::new(vec![
        display(0x04280a80, 0, 0, 1920, 1080, true),
        display(0x2b2c5d21, 1920, 0, 2560, 1440, false),
        inactive,
    ]);

    let moves = display_set.origin_moves_to(DisplayId(0x2b2c5d21))?;
    assert!(moves.iter().any(|m| m.id == DisplayId(0x3f003f00)));

    Ok(())
}

#[test]
fn test_missing_target_plans_nothing() {
    let display_set = DisplaySet::new(vec![display(0x04280a80, 0, 0, 1920, 1080, true)]);

    let result = display_set.origin_moves_to(DisplayId(0xdeadbeef));
    assert!(matches!(
        result,
        Err(DisplayError::NoSuchDisplay(DisplayId(0xdeadbeef)))
    ));
}

#[test]
fn test_make_main_on_the_main_display_is_a_no_op() -> Result<(), Box<dyn std::error::Error>> {
    let display_set = DisplaySet::new(vec![
        display(0x04280a80, 0, 0, 1920, 1080, true),
        display(0x2b2c5d21, 1920, 0, 2560, 1440, false),
    ]);

    let main = display_set.main();
    assert!(main.is_main());

    // Returns before any configuration transaction is started, so this
    // succeeds even where no display services are available.
    main.make_main()?;

    Ok(())
}
