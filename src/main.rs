use chrono::Utc;
use clap::Parser;
use colored::Colorize;
use std::path::Path;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use mind2design::cli::Args;
use mind2design::config::Config;
use mind2design::intent::Category;
use mind2design::log::{self, RunRecord};
use mind2design::provider::{self, ImageGenerator};
use mind2design::synth::{self, Generated, Source};
use mind2design::ux::{self, Refinement};
use mind2design::{compile, describe_in_tamil, generate_prompt};

fn init_tracing(debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if debug { "mind2design=debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.debug);

    let job = args.job_type();

    if args.list_options {
        match &job {
            Some(j) => ux::print_catalog(j.category),
            None => Category::ALL.into_iter().for_each(ux::print_catalog),
        }
        return Ok(());
    }

    let mut cfg = Config::load(args.config.as_deref())?;
    cfg.apply_args(&args);
    debug!(provider = ?cfg.provider, model = %cfg.model, "configuration loaded");

    let intent = args.build_intent()?;
    let modifiers = args.modifier_set();
    let synthesizer = synth::make_synthesizer(&cfg);

    // Modifiers only apply to the deterministic compiler.
    let generated = if args.compile_only || !modifiers.is_empty() {
        Generated {
            prompt: compile(job.as_ref(), &intent, &modifiers),
            source: Source::Compiled,
            fallback_reason: None,
        }
    } else {
        let pb = ux::spinner(&format!("Synthesizing prompt with {}...", synthesizer.name()));
        let out = generate_prompt(synthesizer.as_ref(), job.as_ref(), &intent).await;
        pb.finish_and_clear();
        out
    };

    ux::show_prompt(&generated, synthesizer.name());
    let description = describe_in_tamil(job.as_ref(), &intent);
    ux::show_description(&description);

    let mut state = Refinement::new(intent, modifiers, generated.prompt.clone());
    if args.interactive {
        state = ux::refine_loop(job.as_ref(), state)?;
    }
    let refined = state.prompt != generated.prompt;

    let mut image_url = None;
    if args.render {
        let images = provider::make_image_generator(&cfg);
        let pb = ux::spinner("Generating image...");
        let result = images.generate(&state.prompt).await;
        pb.finish_and_clear();
        match result {
            Ok(url) => {
                println!("{} {}", "image:".green().bold(), url);
                image_url = Some(url);
            }
            Err(e) => {
                warn!(error = %e, "image generation failed");
                println!("{} {}", "image generation failed:".red().bold(), e);
            }
        }
    }

    if args.save {
        let description_ta = describe_in_tamil(job.as_ref(), &state.intent);
        let record = RunRecord {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            job,
            modifiers: state.modifiers,
            synthesizer: synthesizer.name().to_string(),
            source: if refined { Source::Compiled } else { generated.source },
            fallback_reason: generated.fallback_reason,
            description_ta,
            intent: state.intent,
            prompt: state.prompt,
            image_url,
        };
        let saved = log::save_run(Path::new(&cfg.out_dir), &record)?;
        log::print_saved_paths(&saved);
    }

    Ok(())
}
