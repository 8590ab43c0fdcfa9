use glam::Vec2;
use portfolio_fx::config::{FxConfig, ParticleMotion};
use portfolio_fx::effects::{card_offset, translate, Typewriter};
use portfolio_fx::form::{ContactFields, FormError, SubmitState, MISSING_FIELDS};
use portfolio_fx::particles::{bob, offset_for, ParticleSeed};
use portfolio_fx::scroll::{
    hero_parallax, navbar_background, stagger_delay, translate_y, RevealTracker, NAVBAR_RESTING,
    NAVBAR_SCROLLED,
};

fn lcg(seed: u64) -> impl FnMut() -> f64 {
    let mut state = seed;
    move || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (state >> 11) as f64 / (1u64 << 53) as f64
    }
}

fn filled() -> ContactFields {
    ContactFields {
        name: Some("Ada".into()),
        email: Some("ada@example.com".into()),
        subject: Some("Hello".into()),
        message: Some("Nice site".into()),
    }
}

#[test]
fn reveal_happens_once_and_sticks() {
    let mut tracker = RevealTracker::new(0.1);
    assert!(!tracker.observe(0, false, 0.0));
    assert!(!tracker.observe(0, true, 0.05));
    assert!(!tracker.is_revealed(0));

    assert!(tracker.observe(0, true, 0.25));
    assert!(tracker.is_revealed(0));
    // leaving and re-entering never fires again
    assert!(!tracker.observe(0, false, 0.0));
    assert!(tracker.is_revealed(0));
    assert!(!tracker.observe(0, true, 0.9));
    assert_eq!(tracker.revealed_count(), 1);

    assert!(tracker.observe(3, true, 0.1));
    assert_eq!(tracker.revealed_count(), 2);
}

#[test]
fn stagger_grows_by_index() {
    assert_eq!(stagger_delay(0, 0.1), "0s");
    assert_eq!(stagger_delay(1, 0.1), "0.1s");
    assert_eq!(stagger_delay(4, 0.5), "2s");
}

#[test]
fn navbar_steps_at_threshold() {
    for y in [0.0, 50.0, 99.9, 100.0] {
        assert_eq!(navbar_background(y, 100.0), NAVBAR_RESTING, "y={y}");
    }
    for y in [100.01, 101.0, 5000.0] {
        assert_eq!(navbar_background(y, 100.0), NAVBAR_SCROLLED, "y={y}");
    }
    // any sequence of offsets lands on the same two values
    let seq = [0.0, 150.0, 100.0, 101.0, 20.0];
    let got: Vec<_> = seq.iter().map(|&y| navbar_background(y, 100.0)).collect();
    assert_eq!(got, [NAVBAR_RESTING, NAVBAR_SCROLLED, NAVBAR_RESTING, NAVBAR_SCROLLED, NAVBAR_RESTING]);
}

#[test]
fn hero_parallax_ratios() {
    let (content, scene) = hero_parallax(200.0);
    assert_eq!(content, 100.0);
    assert!((scene - 60.0).abs() < 1e-9);
    assert_eq!(translate_y(12.5), "translateY(12.5px)");
}

#[test]
fn cards_lean_toward_pointer_inside_radius() {
    let center = Vec2::new(100.0, 100.0);
    let near = card_offset(Vec2::new(200.0, 100.0), center, 200.0);
    // distance 100 -> strength 0.5 -> 100 * 0.5 * 0.1
    assert!((near.x - 5.0).abs() < 1e-5 && near.y == 0.0, "{near:?}");

    assert_eq!(card_offset(Vec2::new(300.0, 100.0), center, 200.0), Vec2::ZERO);
    assert_eq!(card_offset(Vec2::new(900.0, 900.0), center, 200.0), Vec2::ZERO);
    assert_eq!(card_offset(center, center, 200.0), Vec2::ZERO);
    assert_eq!(translate(Vec2::ZERO), "translate(0px, 0px)");
}

#[test]
fn typewriter_reveals_one_char_per_tick() {
    let mut w = Typewriter::new("héllo");
    let frames: Vec<String> = std::iter::from_fn(|| w.tick().map(str::to_owned)).collect();
    assert_eq!(frames, ["h", "hé", "hél", "héll", "héllo"]);
    assert!(w.is_done());
    assert_eq!(w.tick(), None);

    let mut empty = Typewriter::new("");
    assert!(empty.is_done());
    assert_eq!(empty.tick(), None);
}

#[test]
fn complete_form_validates() {
    let msg = filled().validate().expect("valid");
    assert_eq!(msg.name, "Ada");
    assert_eq!(msg.message, "Nice site");
}

#[test]
fn any_empty_field_blocks() {
    let blanks: [fn(&mut ContactFields); 4] = [
        |f| f.name = Some(String::new()),
        |f| f.email = None,
        |f| f.subject = Some(String::new()),
        |f| f.message = None,
    ];
    for (i, blank) in blanks.iter().enumerate() {
        let mut fields = filled();
        blank(&mut fields);
        let err = fields.validate().expect_err("should block");
        assert!(matches!(err, FormError::MissingField(_)), "case {i}");
        assert_eq!(err.to_string(), MISSING_FIELDS);
    }
    assert_eq!(ContactFields::default().validate(), Err(FormError::MissingField("name")));
}

#[test]
fn submit_state_round_trip() {
    let mut state = SubmitState::Idle;
    assert!(state.begin("Send Message".into()));
    assert!(state.is_sending());
    // a second submit while sending is refused and keeps the first label
    assert!(!state.begin("Sending...".into()));
    assert_eq!(state.finish().as_deref(), Some("Send Message"));
    assert!(!state.is_sending());
    assert_eq!(state.finish(), None);
    // once finished (sent or cancelled) the form takes submissions again
    assert!(state.begin("Send Message".into()));
}

#[test]
fn particle_seeds_stay_in_range() {
    let mut rng = lcg(42);
    for _ in 0..500 {
        let s = ParticleSeed::sample(&mut rng);
        assert!((0.0..100.0).contains(&s.left) && (0.0..100.0).contains(&s.top));
        assert!((0.0..6.0).contains(&s.delay));
        assert!((3.0..6.0).contains(&s.duration));
        assert!((0.5..1.0).contains(&s.speed));
        assert!((50.0..100.0).contains(&s.amplitude));
    }
}

#[test]
fn fixed_motion_reuses_seed_resampled_draws_each_tick() {
    let mut rng = lcg(9);
    let seed = ParticleSeed::sample(&mut rng);
    let a = offset_for(ParticleMotion::Fixed, &seed, 3.0, 2, &mut rng);
    let b = offset_for(ParticleMotion::Fixed, &seed, 3.0, 2, &mut rng);
    assert_eq!(a, b);
    assert_eq!(a, bob(3.0, 2, seed.speed, seed.amplitude));

    let mut calls = 0;
    let mut counting = || {
        calls += 1;
        0.5
    };
    let r = offset_for(ParticleMotion::Resampled, &seed, 3.0, 2, &mut counting);
    assert_eq!(calls, 2);
    assert!((r - bob(3.0, 2, 0.75, 75.0)).abs() < 1e-12);
    assert!(r.abs() < 100.0);
}

#[test]
fn config_defaults_match_page() {
    let cfg = FxConfig::default();
    assert_eq!(cfg.particle_count, 50);
    assert_eq!(cfg.particle_motion, ParticleMotion::Resampled);
    assert_eq!(cfg.reveal_threshold, 0.1);
    assert_eq!(cfg.reveal_root_margin, "0px 0px -50px 0px");
    assert_eq!(cfg.submit_delay_ms, 2000);
    assert_eq!(cfg.typing_start_delay_ms, 1000);
    assert_eq!(cfg.typing_interval_ms, 50);
    assert_eq!(FxConfig::from_attributes(|_| None), cfg);
}

#[test]
fn config_reads_data_attributes() {
    let cfg = FxConfig::from_attributes(|name| match name {
        "data-particle-count" => Some(" 80 ".into()),
        "data-particle-motion" => Some("Fixed".into()),
        "data-submit-delay-ms" => Some("not a number".into()),
        _ => None,
    });
    assert_eq!(cfg.particle_count, 80);
    assert_eq!(cfg.particle_motion, ParticleMotion::Fixed);
    assert_eq!(cfg.submit_delay_ms, 2000);
    assert!("wobbly".parse::<ParticleMotion>().is_err());
}
