//! Scripted box-editing session.
//!
//! Usage:
//! ```text
//! cargo run --example session                 # default 10 x 8 x 6 ft box
//! cargo run --example session -- 12 9 7       # length breadth height
//! RUST_LOG=boxwright=debug cargo run --example session
//! ```

use boxwright::editor::{EditorCommand, KeyChord};
use boxwright::math::{Point3, Vector3};
use boxwright::model::{DimensionInput, Face};
use boxwright::{BoxEditor, EditorConfig};

fn main() -> boxwright::Result<()> {
    // Default: WARN for everything, INFO for boxwright.
    // Override with RUST_LOG env var (e.g. RUST_LOG=boxwright=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("session=info".parse().unwrap_or_default())
        .add_directive("boxwright=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let input = match args.as_slice() {
        [l, b, h] => DimensionInput::new(l, b, h),
        _ => DimensionInput::new("10", "8", "6"),
    };

    let mut editor = BoxEditor::new(EditorConfig::default());
    println!("{}\n", editor.readout());

    if let Err(err) = editor.submit(&input) {
        eprintln!("{err}");
        return Ok(());
    }
    println!("created:\n{}\n", editor.readout());

    let corner = editor
        .handles()
        .and_then(|h| h.position(0))
        .copied()
        .unwrap_or_else(Point3::origin);
    editor.apply(EditorCommand::BeginDrag { handle: 0 })?;
    editor.apply(EditorCommand::DragTo {
        handle: 0,
        position: corner + Vector3::new(0.5, 0.0, 0.0),
    })?;
    editor.apply(EditorCommand::EndDrag)?;
    println!("after stretching length:\n{}\n", editor.readout());

    editor.apply(EditorCommand::RemoveFace(Face::Top))?;
    // Click in the middle of the main viewport.
    let (x, y) = (
        f64::from(editor.config().viewport.width) / 2.0,
        f64::from(editor.config().viewport.height) / 2.0,
    );
    editor.pointer_down_at(x, y)?;
    match editor.pointer_up_at(x, y)? {
        Some(outcome) if outcome.is_ignored() => println!("click ignored: {outcome:?}"),
        Some(outcome) => println!("click: {outcome:?}"),
        None => {}
    }
    println!("removed faces: {:?}", editor.removed_faces());

    editor.apply(EditorCommand::Key(KeyChord::new(true, 'z')))?;
    println!("after undo: {:?}\n", editor.removed_faces());

    editor.apply(EditorCommand::Reset)?;
    println!("after reset:\n{}", editor.readout());

    let frame = editor.frame();
    for item in &frame.items {
        println!(
            "  {:<9} extents {:>6.2} x {:>6.2} x {:>6.2}  triangles {}/{}",
            item.name,
            item.extents.x,
            item.extents.y,
            item.extents.z,
            item.visible_triangles(),
            item.mesh.indices.len()
        );
    }
    Ok(())
}
