// Compile-time knobs. There is no config file, env var or CLI flag.

#[derive(Clone, Debug)]
pub struct Config {
    pub title: &'static str,
    pub width: usize,          // initial client width (pixels)
    pub height: usize,         // initial client height (pixels)
    pub brush_half_size: u32,  // starting half-size of every stamped square
    pub min_brush: u32,        // `-` never goes below this
    pub fill_alpha: f32,       // translucency of every filled shape
    pub background: u32,       // 0x00RRGGBB clear color (AliceBlue)
    pub drag_threshold: f32,   // pixels the pointer must travel before a press becomes a drag
    pub target_fps: usize,     // how often the window is polled
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Paint but Worse",
            width: 800,
            height: 600,
            brush_half_size: 30,
            min_brush: 1,
            fill_alpha: 0.7,
            background: 0x00_F0_F8_FF,
            drag_threshold: 4.0,
            target_fps: 60,
        }
    }
}
