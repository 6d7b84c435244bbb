//! Prompt assembly for the inference service
//!
//! Prompts are the base instruction, the guidance for one engine (or for
//! classification, or for card content) and the user's request, separated
//! by rules.

use crate::model::config::EngineKind;

/// Instruction shared by every pattern prompt
pub const BASE_PROMPT: &str = "You are a generative artist and mathematician. \
Answer only with a JSON object matching the requested schema; no prose, no markdown.";

const TURTLE_GUIDANCE: &str = "ENGINE: l_system\n\
Branching, fractal or organic patterns built by string rewriting.\n\
- axiom: starting string such as \"F\", \"X\" or \"F+F+F+F\"\n\
- rules: single-symbol productions; F and G draw forward, + and - turn, [ and ] push and pop\n\
- angle: turn angle in degrees\n\
- iterations: rewriting rounds, 3 to 6 works well\n\
- style: stroke color to match the request, fill almost always \"none\"\n\
Known systems: fern X -> F+[[X]-X]-F[-FX]+X, F -> FF at 25 degrees; \
Koch F--F--F with F -> F+F--F+F at 60; Sierpinski F-G-G with F -> F-G+F+G-F, G -> GG at 120; \
dragon FX with X -> X+YF+, Y -> -FX-Y at 90.";

const PARAMETRIC_GUIDANCE: &str = "ENGINE: parametric\n\
Circular, hypnotic or spirograph-like curves.\n\
- equation_type: rose, lissajous, epitrochoid or hypotrochoid\n\
- amplitude_a, amplitude_b: size in pixels, 50 to 500\n\
- frequency_a, frequency_b: cycles, 1 to 20\n\
- phase_shift: radians, 0 to 6.28\n\
- num_points: samples, 500 to 2000\n\
- style: stroke color and width 0.5 to 10";

const TESSELLATION_GUIDANCE: &str = "ENGINE: tessellation\n\
Rigid, symmetrical, tiled or mosaic patterns.\n\
- tile_shape: square, hexagon, triangle or diamond\n\
- tile_size: pixels, 50 to 200\n\
- rotation: degrees, 0 to 360\n\
- spacing: gap in pixels, 0 to 10\n\
- color_palette: 2 to 5 hex colors; the first two alternate\n\
- style: stroke color and width of the tile outlines";

const ROUTER_GUIDANCE: &str = "Classify the request into one engine and answer with \
{\"engine_type\": ...}. Use l_system when the request is ambiguous.";

const CONTENT_GUIDANCE: &str = "Write the text of an invitation card for the request: \
event_title, event_subtitle, date_placeholder, time_placeholder, venue_placeholder, rsvp_text, \
and a color_scheme with primary_text_color, secondary_text_color, overlay_color and an \
overlay_opacity between 0 and 1 that keeps the text readable over the pattern.";

/// Words in a request that point at an engine
pub const fn keywords(kind: EngineKind) -> &'static [&'static str] {
    match kind {
        EngineKind::Turtle => &[
            "fractal",
            "branching",
            "organic",
            "fern",
            "plant",
            "tree",
            "snowflake",
            "recursive",
            "natural",
        ],
        EngineKind::Parametric => &[
            "spirograph",
            "circular",
            "hypnotic",
            "vortex",
            "cosmic",
            "flowing",
            "rose",
            "lissajous",
            "spiral",
            "swirl",
        ],
        EngineKind::Tessellation => &[
            "tessellation",
            "tiled",
            "mosaic",
            "geometric",
            "architectural",
            "symmetrical",
            "grid",
            "honeycomb",
            "hexagon",
        ],
    }
}

const fn guidance(kind: EngineKind) -> &'static str {
    match kind {
        EngineKind::Turtle => TURTLE_GUIDANCE,
        EngineKind::Parametric => PARAMETRIC_GUIDANCE,
        EngineKind::Tessellation => TESSELLATION_GUIDANCE,
    }
}

fn assemble(sections: &[&str], user_prompt: &str) -> String {
    let mut prompt = sections.join("\n\n");
    prompt.push_str("\n\n---\nUSER PROMPT:\n");
    prompt.push_str(user_prompt);
    prompt
}

/// Prompt asking for a configuration of `kind`
pub fn build_engine_prompt(kind: EngineKind, user_prompt: &str) -> String {
    assemble(&[BASE_PROMPT, guidance(kind)], user_prompt)
}

/// Prompt asking which engine fits the request
pub fn build_router_prompt(user_prompt: &str) -> String {
    let mut sections = vec![ROUTER_GUIDANCE.to_string()];
    for kind in EngineKind::ALL {
        sections.push(format!("{}: {}", kind, keywords(kind).join(", ")));
    }
    let sections: Vec<&str> = sections.iter().map(String::as_str).collect();
    assemble(&sections, user_prompt)
}

/// Prompt asking for card text and colors
pub fn build_content_prompt(user_prompt: &str) -> String {
    assemble(&[BASE_PROMPT, CONTENT_GUIDANCE], user_prompt)
}

/// Pull the user's request back out of an assembled prompt
pub fn user_request(prompt: &str) -> &str {
    prompt
        .rsplit_once("USER PROMPT:\n")
        .map_or(prompt, |(_, request)| request)
}
