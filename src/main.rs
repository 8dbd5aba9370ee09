use anyhow::{Context, Result};
use bounce_scene::cli::Cli;
use bounce_scene::layout::load_layout;
use bounce_scene::scenes::{assemble, scene_by_name, SceneAssembly};
use clap::Parser;

fn build_scene(cli: &Cli) -> Result<SceneAssembly> {
    match &cli.layout {
        Some(path) => {
            let layout = load_layout(path)?;
            assemble(&layout, cli.strict).context(format!("Failed to assemble {:?}", path))
        }
        None => scene_by_name(&cli.scene, cli.strict)
            .context(format!("Failed to build scene `{}`", cli.scene)),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let scene = build_scene(&cli)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&scene.summary())?);
        return Ok(());
    }

    if !cli.quiet {
        let sun = &scene.lights.directional;
        println!(
            "Lights: ambient {:.1}, sun {:.1} at {} (shadows: {})",
            scene.lights.ambient.intensity,
            sun.intensity,
            sun.position,
            sun.cast_shadow()
        );
        for platform in &scene.platforms {
            println!(
                "  platform at {} tag={}",
                platform.body.position,
                platform.tag().unwrap_or("-")
            );
        }
        if let Some(bounds) = scene.bounds() {
            println!("Play area: {} to {} (size {})", bounds.min, bounds.max, bounds.size());
        }
        println!("Scene ready: {} platforms", scene.platforms.len());
    }

    Ok(())
}
