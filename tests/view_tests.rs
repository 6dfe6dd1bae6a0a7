//! Integration tests for the terminal board view

use corsi_tui::core::GameState;
use corsi_tui::term::{BoardView, FrameBuffer, Viewport};
use corsi_tui::types::MAX_BLOCKS;

fn render_to_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            all.push(fb.get(x, y).unwrap().ch);
        }
        all.push('\n');
    }
    all
}

#[test]
fn view_renders_header_with_level_and_attempt() {
    let state = GameState::new(1);
    let view = BoardView::default();
    let mut fb = FrameBuffer::new(0, 0);
    view.render_into(&state.snapshot(), None, Viewport::new(80, 40), &mut fb);

    let text = render_to_text(&fb);
    assert!(text.contains("level 3"));
    assert!(text.contains("attempt 1/3"));
    assert!(text.contains("mode forward"));
}

#[test]
fn view_prompt_follows_status() {
    let mut state = GameState::new(1);
    let view = BoardView::default();
    let vp = Viewport::new(80, 40);
    let mut fb = FrameBuffer::new(0, 0);

    view.render_into(&state.snapshot(), None, vp, &mut fb);
    assert!(render_to_text(&fb).contains("press enter to start"));

    state.start();
    view.render_into(&state.snapshot(), None, vp, &mut fb);
    assert!(render_to_text(&fb).contains("watch the sequence"));

    state.finish_presentation();
    view.render_into(&state.snapshot(), None, vp, &mut fb);
    assert!(render_to_text(&fb).contains("repeat the sequence"));
}

#[test]
fn view_shows_error_panel_after_a_miss() {
    let mut state = GameState::new(7);
    state.start();
    state.finish_presentation();

    // Deliberately wrong: first element repeated for the whole response.
    let first = state.sequence()[0];
    for _ in 0..state.sequence().len() {
        state.tap(first);
    }
    assert_eq!(state.error_log().count(3), 1);

    let view = BoardView::default();
    let mut fb = FrameBuffer::new(0, 0);
    view.render_into(&state.snapshot(), None, Viewport::new(80, 40), &mut fb);

    let text = render_to_text(&fb);
    assert!(text.contains("ERRORS"));
    assert!(text.contains("level 3: 1"));
}

#[test]
fn every_block_is_reachable_by_mouse() {
    // Sweep the whole viewport: hit testing must find each of the nine
    // blocks somewhere, and nothing outside the board area.
    let state = GameState::new(99);
    let snap = state.snapshot();
    let view = BoardView::default();
    let vp = Viewport::new(80, 40);

    let mut seen = [false; MAX_BLOCKS];
    for row in 0..vp.height {
        for col in 0..vp.width {
            if let Some(id) = view.hit_test(&snap, vp, col, row) {
                seen[id as usize] = true;
            }
        }
    }
    assert!(seen.iter().all(|&s| s), "unreachable blocks: {:?}", seen);

    // Top-left corner is header space, never a block.
    assert_eq!(view.hit_test(&snap, vp, 0, 0), None);
}
