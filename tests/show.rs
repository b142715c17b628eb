use fastrand::Rng;
use fireworks_intro::canvas::Canvas;
use fireworks_intro::host::{Element, SHOW_CLASS};
use fireworks_intro::phase::CONTENT_ID;
use fireworks_intro::{Page, Phase, Recorder, Show, Surface};

const FRAME_MS: f64 = 1000.0 / 60.0;

fn page() -> Page {
    let mut page = Page::new();
    page.insert(CONTENT_ID, Element::new(vec!["Welcome!".into()]));
    page
}

/// Plays the intro until it bursts, returning the burst time.
fn play_intro(show: &mut Show<Page>, surface: &mut impl Surface) -> f64 {
    let mut now = 0.0;
    let mut explosions = 0;
    while show.phase() == Phase::Intro {
        now += FRAME_MS;
        explosions += show.frame(now, surface).explosions;
        assert!(now < 60_000.0, "intro never burst");
    }
    assert_eq!(explosions, 1);
    now
}

struct Run {
    spawns: usize,
    frames_until_clear: usize,
    targets: Vec<(f32, f32)>,
}

fn run(seed: u64) -> Run {
    let mut surface = Recorder::new(320.0, 200.0);
    let mut show = Show::new(page(), Rng::with_seed(seed), &surface);
    let since = play_intro(&mut show, &mut surface);

    let mut spawns = 0;
    let mut targets = Vec::new();
    for t in [0.0, 1001.0, 2002.0] {
        let report = show.frame(since + t, &mut surface);
        if report.spawned {
            spawns += 1;
            let newest = show.simulation().fireworks().last().unwrap();
            targets.push(newest.target());
        }
    }

    // Freeze the clock so nothing else launches, then let everything burn out
    let mut frames_until_clear = 0;
    while !show.simulation().fireworks().is_empty() {
        let report = show.frame(since + 2002.0, &mut surface);
        assert!(!report.spawned);
        frames_until_clear += 1;
        assert!(frames_until_clear < 10_000, "fireworks never burned out");
    }

    Run {
        spawns,
        frames_until_clear,
        targets,
    }
}

#[test]
fn seeded_show_is_deterministic() {
    let first = run(2024);
    let second = run(2024);

    assert_eq!(first.spawns, 2);
    assert_eq!(first.spawns, second.spawns);
    assert_eq!(first.targets, second.targets);
    assert_eq!(first.frames_until_clear, second.frames_until_clear);
    // Each burst needs 67 frames to fade out
    assert!(first.frames_until_clear >= 67);
}

#[test]
fn content_fades_in_after_intro() {
    let mut surface = Recorder::new(320.0, 200.0);
    let mut show = Show::new(page(), Rng::with_seed(5), &surface);
    assert!(!show.host().element(CONTENT_ID).unwrap().is_visible());

    let mut now = 0.0;
    while show.phase() == Phase::Intro {
        now += FRAME_MS;
        show.host_mut().set_clock(now);
        show.frame(now, &mut surface);
    }

    let content = show.host().element(CONTENT_ID).unwrap();
    assert!(content.is_visible());
    assert!(content.has_class(SHOW_CLASS));
    assert_eq!(show.host().opacity(CONTENT_ID), 0.0);

    show.host_mut().set_clock(now + 1000.0);
    assert_eq!(show.host().opacity(CONTENT_ID), 1.0);
}

#[test]
fn survives_resizing_between_frames() {
    let mut canvas = Canvas::new(160, 96);
    let mut show = Show::new(page(), Rng::with_seed(8), &canvas);
    let since = play_intro(&mut show, &mut canvas);

    let sizes = [(40, 20), (0, 0), (400, 240), (3, 1), (160, 96)];
    let mut now = since;
    for i in 0..600 {
        if i % 120 == 0 {
            let (w, h) = sizes[i / 120];
            canvas.resize(w, h);
        }
        now += FRAME_MS;
        show.frame(now, &mut canvas);
    }

    assert!(show.simulation().spawned() >= 9);
    assert_eq!(canvas.size(), (160, 96));
}

#[test]
fn launches_stay_one_second_apart() {
    let mut surface = Recorder::new(320.0, 200.0);
    let mut show = Show::new(page(), Rng::with_seed(13), &surface);
    let since = play_intro(&mut show, &mut surface);

    let mut launches = Vec::new();
    let mut now = since;
    while now < since + 10_000.0 {
        now += 16.0;
        if show.frame(now, &mut surface).spawned {
            launches.push(now);
        }
    }

    assert!(launches.windows(2).all(|w| w[1] - w[0] > 1000.0));
    assert_eq!(launches.len(), 9);
}
