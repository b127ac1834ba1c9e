//! Static symbol tables used by the normalizer and the matching core.

use phf::phf_set;

/// Uppercase Greek command names. The normalizer pads these with a trailing
/// space when another token is glued directly onto them (`\Gamma R` vs
/// `\GammaR`).
pub const UPPER_GREEK_CMDS: &[&str] = &[
    "Gamma", "Delta", "Theta", "Lambda", "Xi", "Pi", "Sigma", "Upsilon", "Phi", "Psi", "Omega",
];

/// Command names treated as single semantic units during matching.
///
/// A command in this set contributes its whole name as a comparable unit
/// (`\alpha` -> `alpha`), so `$\alpha$` in an abbreviation can line up with
/// `$\alpha$-synclein` in the definition phrase. Any command *not* in this
/// set is formatting markup and contributes only the first letter of its
/// name (`\textbf` -> `t`).
pub static KNOWN_COMMAND_NAMES: phf::Set<&'static str> = phf_set! {
    // Lowercase Greek
    "alpha", "beta", "gamma", "delta", "epsilon", "zeta", "eta", "theta",
    "iota", "kappa", "lambda", "mu", "nu", "xi", "omicron", "pi", "rho",
    "sigma", "tau", "upsilon", "phi", "chi", "psi", "omega",

    // Uppercase Greek (exact case, as written in LaTeX)
    "Gamma", "Delta", "Theta", "Lambda", "Xi", "Pi", "Sigma", "Upsilon",
    "Phi", "Psi", "Omega",

    // Common functions
    "sin", "cos", "tan", "csc", "sec", "cot",
    "arcsin", "arccos", "arctan",
    "sinh", "cosh", "tanh",
    "log", "ln", "exp",
    "sqrt",
    "frac",

    // Limits, bounds, named operators
    "lim", "max", "min", "sup", "inf",
    "det", "dim", "deg",
    "gcd", "hom", "ker", "Pr",

    // Large operators
    "sum", "prod", "int", "oint",
    "bigcup", "bigcap", "bigvee", "bigwedge",

    // Calculus
    "partial", "nabla", "mathrm",

    // Symbols with semantic meaning
    "infty", "prime",

    // Logic and set theory
    "forall", "exists", "in", "notin", "subset", "supset",

    // Relations
    "leq", "geq", "equiv", "approx", "propto", "sim", "simeq",

    // Binary operators
    "pm", "mp", "times", "div", "cdot", "ast", "star",
};

/// Whether a command name (without the leading backslash) is a recognized
/// semantic unit.
pub fn is_known_command(name: &str) -> bool {
    KNOWN_COMMAND_NAMES.contains(name)
}
