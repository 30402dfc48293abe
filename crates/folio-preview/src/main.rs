//! Native preview of the portfolio choreography.
//!
//! Sweeps scroll progress and animation frames through `folio-core` and
//! prints the resulting values, so curves can be tuned without a browser.

use anyhow::{bail, Result};
use clap::Parser;
use folio_core::{
    intersection_ratio, visible_below_header, HeaderOffset, HeroFade, IntersectionEntry,
    ObserverSupport, Orbit, OrbitConfig, ProjectCounter, RingSpec, Skill, Timeline,
    VisibilityTracker,
};

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Print scroll choreography sweep tables")]
struct Cli {
    /// Number of timeline cards (and project cards in the tracker run).
    #[arg(long, default_value_t = 5)]
    items: usize,

    /// Progress increment for the sweeps.
    #[arg(long, default_value_t = 0.1)]
    step: f32,

    /// Number of orbit rings.
    #[arg(long, default_value_t = 4)]
    rings: usize,

    /// Frames to run the orbit for before printing angles.
    #[arg(long, default_value_t = 600)]
    frames: u32,

    /// Progress at which the first orbit ring is revealed.
    #[arg(long = "start-offset", default_value_t = 0.0)]
    start_offset: f32,
}

/// `0, step, 2*step, ...` up to and including 1.
fn sweep(step: f32) -> impl Iterator<Item = f32> {
    // 1/0.1 lands a hair above 10 in f32
    let steps = (1.0 / step - 1e-4).ceil() as usize;
    (0..=steps).map(move |i| (i as f32 * step).min(1.0))
}

fn print_timeline(cli: &Cli) {
    let timeline = Timeline::new(cli.items);
    println!("== timeline ({} cards) ==", timeline.len());
    let mut header = String::from("progress  line%");
    for i in 0..timeline.len() {
        header.push_str(&format!("   op{i}  sc{i}"));
    }
    println!("{header}");
    for p in sweep(cli.step) {
        let mut row = format!("{:>8.2} {:>6.1}", p, timeline.line_width_percent(p));
        for f in timeline.frames(p) {
            row.push_str(&format!(" {:>5.2} {:>4.2}", f.opacity, f.scale));
        }
        println!("{row}");
    }
}

fn print_hero(cli: &Cli) {
    let hero = HeroFade::new();
    println!("== hero ==");
    println!("progress opacity  offset");
    for p in sweep(cli.step) {
        let f = hero.frame(p);
        println!("{:>8.2} {:>7.2} {:>7.1}", p, f.opacity, f.offset_y);
    }
}

fn orbit_config(cli: &Cli) -> OrbitConfig {
    let defaults = OrbitConfig::default();
    // extra rings keep growing outward and alternate direction
    let rings = (0..cli.rings)
        .map(|i| match defaults.rings.get(i) {
            Some(spec) => *spec,
            None => {
                let last = defaults.rings[defaults.rings.len() - 1];
                let grow = (i + 1 - defaults.rings.len()) as f32 * 100.0;
                let sign = if i % 2 == 0 { 1.0 } else { -1.0 };
                RingSpec {
                    radius: last.radius + grow,
                    speed_deg_per_frame: sign * last.speed_deg_per_frame.abs(),
                }
            }
        })
        .collect();
    OrbitConfig {
        rings,
        reveal_start: cli.start_offset,
    }
}

fn print_orbit(cli: &Cli) -> Result<()> {
    let config = orbit_config(cli);
    let skills: Vec<Skill> = Skill::defaults()
        .into_iter()
        .filter(|s| s.ring < cli.rings)
        .collect();
    let mut orbit = Orbit::new(config, skills)?;
    println!("== orbit ({} rings, start offset {:.2}) ==", cli.rings, cli.start_offset);
    println!("progress revealed badges");
    orbit.start();
    for p in sweep(cli.step) {
        orbit.set_progress(p);
        println!(
            "{:>8.2} {:>8} {:>6}",
            p,
            orbit.revealed_count(),
            orbit.visible_badges().count()
        );
    }
    for _ in 0..cli.frames {
        orbit.tick();
    }
    println!("after {} frames:", cli.frames);
    for (i, ring) in orbit.rings().iter().enumerate() {
        println!(
            "  ring {i}: {:>7.2} deg ({:+.2}/frame)",
            ring.angle_deg, ring.speed_deg_per_frame
        );
    }
    for (skill, pos) in orbit.visible_badges() {
        println!("  {:<11} ({:>7.1}, {:>7.1})", skill.name, pos.x, pos.y);
    }
    Ok(())
}

/// Scroll a column of equally tall cards under a sticky header and feed the
/// tracker the entries an observer would deliver.
fn print_tracker(cli: &Cli) {
    const VIEWPORT: f32 = 800.0;
    const CARD: f32 = 500.0;
    let header = HeaderOffset::measure(0.0, 96.0);
    let mut tracker = VisibilityTracker::new((0..cli.items).collect(), ObserverSupport::Available);
    tracker.set_header_offset(header);
    let mut counter = ProjectCounter::default();
    counter.enter_view();

    println!("== projects ({} cards, header {:.0}px) ==", cli.items, header.margin_px);
    println!("scroll  active counter visible");
    let total = CARD * cli.items as f32;
    let top_start = header.padding_px();
    for p in sweep(cli.step) {
        let scrolled = p * (total - VIEWPORT).max(0.0);
        for key in 0..cli.items {
            let top = top_start + key as f32 * CARD - scrolled;
            let bottom = top + CARD;
            let ratio = intersection_ratio(top, bottom, 0.0, VIEWPORT);
            tracker.on_active_entry(&IntersectionEntry {
                key,
                ratio,
                is_intersecting: ratio > 0.0,
            });
            tracker.on_visibility_entry(&IntersectionEntry {
                key,
                ratio,
                is_intersecting: visible_below_header(top, bottom, VIEWPORT, header),
            });
        }
        if let Some(index) = tracker.active_index() {
            counter.set_target(index as u32 + 1);
        }
        // a quarter second of frames between samples
        for _ in 0..15 {
            counter.step(1.0 / 60.0);
        }
        let visible: String = tracker
            .visibility()
            .iter()
            .map(|v| if *v { '#' } else { '.' })
            .collect();
        println!(
            "{:>6.0} {:>7} {:>7} {}",
            scrolled,
            tracker.active_index().map_or(-1, |i| i as i64),
            counter.display(),
            visible
        );
    }
    tracker.disconnect();
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    if !(cli.step > 0.0 && cli.step <= 1.0) {
        bail!("--step must be in (0, 1], got {}", cli.step);
    }
    log::info!("preview {:?}", cli);

    print_timeline(&cli);
    print_hero(&cli);
    print_orbit(&cli)?;
    print_tracker(&cli);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::sweep;

    #[test]
    fn sweep_always_ends_at_one() {
        let samples: Vec<f32> = sweep(0.3).collect();
        assert_eq!(samples.len(), 5);
        assert_eq!(*samples.last().unwrap(), 1.0);
        assert!((samples[3] - 0.9).abs() < 1e-6);
    }

    #[test]
    fn sweep_with_exact_divisor_has_no_duplicate_end() {
        let samples: Vec<f32> = sweep(0.1).collect();
        assert_eq!(samples.len(), 11);
        assert_eq!(samples[10], 1.0);
        assert!(samples[9] < 1.0);
        assert_eq!(sweep(1.0).collect::<Vec<_>>(), vec![0.0, 1.0]);
    }
}
