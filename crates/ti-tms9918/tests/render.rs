use proptest::prelude::*;
use ti_tms9918::{
    ActiveSprite, LineBuffer, Personality, Renderer, RowOutput, ScreenMode, Status, palette,
};

const WIDTH: usize = 256;

/// Draw `line` in the slices given by consecutive `cuts`.
fn render(renderer: &Renderer, line: &LineBuffer, row: usize, cuts: &[usize]) -> (Vec<u32>, Status) {
    let mut line = line.clone();
    let mut pixels = vec![0; WIDTH];
    let mut status = Status::default();
    let mut out = RowOutput::new(&mut pixels);
    for pair in cuts.windows(2) {
        renderer.draw(&mut line, row, &mut out, &mut status, pair[0], pair[1], 0);
    }
    assert_eq!(out.position(), WIDTH);
    (pixels, status)
}

fn whole_line() -> Vec<usize> {
    vec![0, WIDTH]
}

fn cuts() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0..=WIDTH, 0..16).prop_map(|mut v| {
        v.push(0);
        v.push(WIDTH);
        v.sort_unstable();
        v
    })
}

fn sprites() -> impl Strategy<Value = Vec<(i32, [u8; 4])>> {
    prop::collection::vec((-16i32..WIDTH as i32, any::<[u8; 4]>()), 0..=4)
}

fn build_line(
    personality: Personality,
    mode: ScreenMode,
    patterns: &[[u8; 4]],
    flags: &[u8],
    sprites: &[(i32, [u8; 4])],
    scroll: u8,
) -> LineBuffer {
    let mut line = LineBuffer::new(personality, mode);
    line.background_colour = 5;
    line.latched_horizontal_scroll = scroll;
    line.patterns.copy_from_slice(patterns);
    line.flags.copy_from_slice(flags);
    for &(x, image) in sprites {
        line.push_sprite(ActiveSprite {
            x,
            image,
            ..ActiveSprite::default()
        });
    }
    line
}

/// Draw a Yamaha `line` of `width` pixels in the cycle slices given by `cuts`.
fn render_yamaha(
    renderer: &Renderer,
    line: &LineBuffer,
    width: usize,
    cuts: &[usize],
) -> (Vec<u32>, Status) {
    let mut line = line.clone();
    let mut pixels = vec![0; width];
    let mut status = Status::default();
    let mut out = RowOutput::new(&mut pixels);
    for pair in cuts.windows(2) {
        renderer.draw_yamaha(&mut line, &mut out, &mut status, pair[0], pair[1]);
    }
    assert_eq!(out.position(), width);
    (pixels, status)
}

/// A Yamaha mode with its pixel width and the cycles that cover it.
fn yamaha_mode() -> impl Strategy<Value = (ScreenMode, usize, usize)> {
    prop_oneof![
        Just((ScreenMode::Graphics, 256, 1024)),
        Just((ScreenMode::ColouredText, 256, 1024)),
        Just((ScreenMode::MultiColour, 256, 1024)),
        Just((ScreenMode::Text, 240, 960)),
        Just((ScreenMode::YamahaText80, 480, 960)),
        Just((ScreenMode::YamahaGraphics3, 256, 1024)),
        Just((ScreenMode::YamahaGraphics4, 256, 1024)),
        Just((ScreenMode::YamahaGraphics5, 512, 1024)),
        Just((ScreenMode::YamahaGraphics6, 512, 1024)),
        Just((ScreenMode::YamahaGraphics7, 256, 1024)),
    ]
}

fn sms_renderer() -> Renderer {
    let mut renderer = Renderer::new(Personality::SmsVdp);
    for entry in 0..32 {
        renderer.write_colour_ram(entry, (entry as u16 * 7) & 0x3F);
    }
    renderer
}

proptest! {
    #[test]
    fn tms_slices_match_whole_line(
        patterns in prop::collection::vec(any::<[u8; 4]>(), 40),
        sprites in sprites(),
        magnified in any::<bool>(),
        large in any::<bool>(),
        multicolour in any::<bool>(),
        points in cuts(),
    ) {
        let mut renderer = Renderer::new(Personality::Tms9918A);
        renderer.sprites_magnified = magnified;
        renderer.sprites_16x16 = large;
        let mode = if multicolour { ScreenMode::MultiColour } else { ScreenMode::Graphics };
        let line = build_line(Personality::Tms9918A, mode, &patterns, &[0; 40], &sprites, 0);

        let (whole, whole_status) = render(&renderer, &line, 0, &whole_line());
        let (sliced, sliced_status) = render(&renderer, &line, 0, &points);
        prop_assert_eq!(whole, sliced);
        prop_assert_eq!(whole_status, sliced_status);
    }

    #[test]
    fn sms_slices_match_whole_line(
        patterns in prop::collection::vec(any::<[u8; 4]>(), 40),
        flags in prop::collection::vec(any::<u8>(), 40),
        sprites in sprites(),
        scroll in any::<u8>(),
        hide_left in any::<bool>(),
        row in 0usize..32,
        points in cuts(),
    ) {
        let mut renderer = sms_renderer();
        renderer.hide_left_column = hide_left;
        renderer.horizontal_scroll_lock = true;
        let line = build_line(Personality::SmsVdp, ScreenMode::SmsMode4, &patterns, &flags, &sprites, scroll);

        let (whole, whole_status) = render(&renderer, &line, row, &whole_line());
        let (sliced, sliced_status) = render(&renderer, &line, row, &points);
        prop_assert_eq!(whole, sliced);
        prop_assert_eq!(whole_status, sliced_status);
    }

    #[test]
    fn yamaha_slices_match_whole_line(
        (mode, width, cycles) in yamaha_mode(),
        patterns in prop::collection::vec(any::<[u8; 4]>(), 40),
        bitmap in prop::collection::vec(any::<u8>(), 256),
        sprites in sprites(),
        magnified in any::<bool>(),
        raw_points in prop::collection::vec(0..=1024usize, 0..16),
    ) {
        let mut renderer = Renderer::new(Personality::V9938);
        renderer.sprites_magnified = magnified;
        let mut line = build_line(Personality::V9938, mode, &patterns, &[0; 40], &sprites, 0);
        line.text_colour = 15;
        line.bitmap.copy_from_slice(&bitmap);

        let mut points: Vec<usize> = raw_points.into_iter().map(|p| p.min(cycles)).collect();
        points.push(0);
        points.push(cycles);
        points.sort_unstable();

        let (whole, whole_status) = render_yamaha(&renderer, &line, width, &[0, cycles]);
        let (sliced, sliced_status) = render_yamaha(&renderer, &line, width, &points);
        prop_assert_eq!(whole, sliced);
        prop_assert_eq!(whole_status, sliced_status);
    }

    #[test]
    fn text_slices_match_whole_line(
        patterns in prop::collection::vec(any::<[u8; 4]>(), 40),
        cut in 0usize..=240,
    ) {
        let renderer = Renderer::new(Personality::Tms9918A);
        let mut line = build_line(Personality::Tms9918A, ScreenMode::Text, &patterns, &[0; 40], &[], 0);
        line.text_colour = 15;

        let draw = |cuts: &[usize]| {
            let mut pixels = vec![0; 240];
            let mut out = RowOutput::new(&mut pixels);
            for pair in cuts.windows(2) {
                renderer.draw_tms_text(&line, &mut out, pair[0], pair[1]);
            }
            pixels
        };
        prop_assert_eq!(draw(&[0, 240]), draw(&[0, cut, 240]));
    }
}

#[test]
fn backdrop_fills_empty_patterns() {
    let renderer = Renderer::new(Personality::Tms9918A);
    let mut line = LineBuffer::new(Personality::Tms9918A, ScreenMode::ColouredText);
    line.background_colour = 2;

    let mut pixels = vec![0; 8];
    let mut status = Status::default();
    let mut out = RowOutput::new(&mut pixels);
    renderer.draw_tms_character(&mut line, &mut out, &mut status, 0, 8);
    assert_eq!(pixels, vec![palette::TMS_PALETTE[2]; 8]);
}

#[test]
fn transparent_sprite_still_collides() {
    let renderer = Renderer::new(Personality::Tms9918A);
    let mut line = LineBuffer::new(Personality::Tms9918A, ScreenMode::Graphics);
    line.push_sprite(ActiveSprite {
        x: 32,
        image: [0xFF, 0, 9, 0],
        ..ActiveSprite::default()
    });
    line.push_sprite(ActiveSprite {
        x: 32,
        image: [0xFF, 0, 0, 0],
        ..ActiveSprite::default()
    });

    let (pixels, status) = render(&renderer, &line, 0, &whole_line());
    assert!(status.contains(Status::SPRITE_COLLISION));
    assert_eq!(pixels[32..40], [palette::TMS_PALETTE[9]; 8]);
}

#[test]
fn separated_sprites_never_collide() {
    let renderer = Renderer::new(Personality::Tms9918A);
    let mut line = LineBuffer::new(Personality::Tms9918A, ScreenMode::Graphics);
    line.push_sprite(ActiveSprite {
        x: 0,
        image: [0xFF, 0, 9, 0],
        ..ActiveSprite::default()
    });
    line.push_sprite(ActiveSprite {
        x: 8,
        image: [0xFF, 0, 3, 0],
        ..ActiveSprite::default()
    });

    let (_, status) = render(&renderer, &line, 0, &whole_line());
    assert!(status.is_empty());
}

#[test]
fn collision_bit_is_never_cleared_by_drawing() {
    let renderer = Renderer::new(Personality::Tms9918A);
    let mut line = LineBuffer::new(Personality::Tms9918A, ScreenMode::Graphics);
    let mut pixels = vec![0; WIDTH];
    let mut status = Status::SPRITE_COLLISION | Status::INTERRUPT;
    let mut out = RowOutput::new(&mut pixels);
    renderer.draw(&mut line, 0, &mut out, &mut status, 0, WIDTH, 0);
    assert_eq!(status, Status::SPRITE_COLLISION | Status::INTERRUPT);
}

#[test]
fn left_column_hidden_once_line_completes() {
    let mut renderer = sms_renderer();
    renderer.hide_left_column = true;
    let mut line = LineBuffer::new(Personality::SmsVdp, ScreenMode::SmsMode4);
    line.background_colour = 3;
    line.patterns[0] = [0xFF, 0xFF, 0, 0];
    line.patterns[1] = [0xFF, 0xFF, 0, 0];
    let backdrop = renderer.colour_ram()[16 + 3];
    let tile = renderer.colour_ram()[3];

    let mut pixels = vec![0; WIDTH];
    let mut status = Status::default();
    let mut out = RowOutput::new(&mut pixels);
    renderer.draw(&mut line, 20, &mut out, &mut status, 0, 100, 0);
    assert_eq!(out.pixels()[..8], [tile; 8]);
    renderer.draw(&mut line, 20, &mut out, &mut status, 100, WIDTH, 0);

    assert_eq!(pixels[..8], [backdrop; 8]);
    assert_eq!(pixels[8..16], [tile; 8]);
}

#[test]
fn left_column_untouched_when_disabled() {
    let renderer = sms_renderer();
    let mut line = LineBuffer::new(Personality::SmsVdp, ScreenMode::SmsMode4);
    line.background_colour = 3;
    line.patterns[0] = [0xFF, 0xFF, 0, 0];
    let (pixels, _) = render(&renderer, &line, 20, &whole_line());
    assert_eq!(pixels[..8], [renderer.colour_ram()[3]; 8]);
}
