// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates all the other layers to accomplish
// a specific goal (building datasets or inspecting a corpus).
//
// Rules for this layer:
//   - No XML walking or normalisation here (that's Layer 4)
//   - No argument parsing or printing here (that's Layer 1)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Corpus files → filtered, columnar training datasets
pub mod extract_use_case;

// Corpus file → JSON record of everything extracted
pub mod dump_use_case;
