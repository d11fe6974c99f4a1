//! ASCII gallows, drawn in ten stages.

/// Number of drawing stages after the empty frame.
pub const STAGES: usize = 10;

const WIDTH: usize = 9;
const HEIGHT: usize = 7;

/// Maps mistakes to a drawing stage in `0..=STAGES`.
///
/// With the default limit of ten, one mistake is one stage. Other limits
/// are scaled, rounding up so the first mistake always draws something and
/// the last one always completes the figure.
pub fn stage_for(mistakes: u8, max_mistakes: u8) -> usize {
    if max_mistakes == 0 {
        return STAGES;
    }
    let mistakes = usize::from(mistakes.min(max_mistakes));
    let max = usize::from(max_mistakes);
    (mistakes * STAGES).div_ceil(max)
}

/// Renders the gallows at `stage` (clamped to [`STAGES`]).
pub fn render(stage: usize) -> String {
    let stage = stage.min(STAGES);
    let mut grid = [[' '; WIDTH]; HEIGHT];

    if stage >= 1 {
        grid[6] = ['='; WIDTH];
    }
    if stage >= 2 {
        grid[0][6] = '+';
        for row in &mut grid[1..6] {
            row[6] = '|';
        }
    }
    if stage >= 3 {
        for cell in &mut grid[0][2..6] {
            *cell = '-';
        }
        grid[0][2] = '+';
    }
    // rope, head, body, arms, legs
    let parts = [
        (1, 2, '|'),
        (2, 2, 'O'),
        (3, 2, '|'),
        (3, 1, '/'),
        (3, 3, '\\'),
        (4, 1, '/'),
        (4, 3, '\\'),
    ];
    for &(row, col, c) in parts.iter().take(stage.saturating_sub(3)) {
        grid[row][col] = c;
    }

    grid.iter()
        .map(|row| row.iter().collect::<String>().trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_for_default_limit_is_one_to_one() {
        for mistakes in 0..=10 {
            assert_eq!(stage_for(mistakes, 10), usize::from(mistakes));
        }
    }

    #[test]
    fn test_stage_for_scales_other_limits() {
        assert_eq!(stage_for(1, 26), 1);
        assert_eq!(stage_for(26, 26), STAGES);
        assert_eq!(stage_for(3, 6), 5);
        assert_eq!(stage_for(0, 3), 0);
    }

    #[test]
    fn test_render_empty_frame_is_blank() {
        assert!(render(0).chars().all(|c| c == '\n'));
    }

    #[test]
    fn test_render_full_figure() {
        let art = render(STAGES);
        let lines: Vec<&str> = art.lines().collect();
        assert_eq!(lines[0], "  +---+");
        assert_eq!(lines[2], "  O   |");
        assert_eq!(lines[3], " /|\\  |");
        assert_eq!(lines[4], " / \\  |");
        assert_eq!(lines[6], "=========");
    }

    #[test]
    fn test_render_each_stage_adds_ink() {
        let ink = |s: usize| render(s).chars().filter(|c| !c.is_whitespace()).count();
        for stage in 1..=STAGES {
            assert!(ink(stage) > ink(stage - 1), "stage {stage}");
        }
    }

    #[test]
    fn test_render_clamps_past_last_stage() {
        assert_eq!(render(STAGES + 5), render(STAGES));
    }
}
