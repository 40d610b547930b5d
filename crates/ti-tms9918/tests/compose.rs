use proptest::prelude::*;
use ti_tms9918::{
    ActiveSprite, ClockConverter, ComposeArgs, LineBuffer, LineComposer, LineLayouts, Personality,
    Renderer, ScreenMode, Status,
};

const LINE: usize = ClockConverter::CYCLES_PER_LINE;

fn compose(renderer: &Renderer, line: &LineBuffer, cuts: &[usize]) -> (Vec<u32>, Status) {
    let layouts = LineLayouts::new();
    let mut line = line.clone();
    let mut output = vec![0; LINE];
    let mut status = Status::default();
    let mut composer = LineComposer::new(&mut output);
    for pair in cuts.windows(2) {
        let mut args = ComposeArgs {
            renderer,
            line: &mut line,
            row: 40,
            status: &mut status,
            cram_dot: 0,
        };
        layouts.compose_line(&mut composer, pair[0], pair[1], &mut args);
    }
    (output, status)
}

fn cuts() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0..=LINE, 0..12).prop_map(|mut v| {
        v.push(0);
        v.push(LINE);
        v.sort_unstable();
        v
    })
}

fn mode() -> impl Strategy<Value = (Personality, ScreenMode)> {
    prop_oneof![
        Just((Personality::Tms9918A, ScreenMode::Graphics)),
        Just((Personality::Tms9918A, ScreenMode::Text)),
        Just((Personality::Tms9918A, ScreenMode::Blank)),
        Just((Personality::SmsVdp, ScreenMode::SmsMode4)),
        Just((Personality::V9938, ScreenMode::YamahaGraphics4)),
    ]
}

proptest! {
    #[test]
    fn sliced_composition_matches_single_pass(
        (personality, screen_mode) in mode(),
        patterns in prop::collection::vec(any::<[u8; 4]>(), 40),
        bitmap in prop::collection::vec(any::<u8>(), 256),
        sprite in (-8i32..256, any::<[u8; 4]>()),
        points in cuts(),
    ) {
        let mut renderer = Renderer::new(personality);
        for entry in 0..32 {
            renderer.write_colour_ram(entry, entry as u16 ^ 0x15);
        }
        let mut line = LineBuffer::new(personality, screen_mode);
        line.background_colour = 6;
        line.text_colour = 11;
        line.latched_horizontal_scroll = 5;
        line.patterns.copy_from_slice(&patterns);
        line.bitmap.copy_from_slice(&bitmap);
        line.push_sprite(ActiveSprite {
            x: sprite.0,
            image: sprite.1,
            ..ActiveSprite::default()
        });

        let whole = compose(&renderer, &line, &[0, LINE]);
        let sliced = compose(&renderer, &line, &points);
        prop_assert_eq!(whole, sliced);
    }
}

#[test]
fn every_cycle_is_written() {
    let renderer = Renderer::new(Personality::Tms9918A);
    let line = LineBuffer::new(Personality::Tms9918A, ScreenMode::Graphics);
    let layouts = LineLayouts::new();
    let mut working = line.clone();
    let mut output = vec![0x1234_5678; LINE];
    let mut status = Status::default();
    let mut composer = LineComposer::new(&mut output);
    let mut args = ComposeArgs {
        renderer: &renderer,
        line: &mut working,
        row: 0,
        status: &mut status,
        cram_dot: 0,
    };
    for n in 0..LINE {
        layouts.compose_line(&mut composer, n, n + 1, &mut args);
    }
    assert_eq!(composer.position(), LINE);
    assert!(output.iter().all(|&p| p != 0x1234_5678));
}
