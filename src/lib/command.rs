//! Shared helpers for assembling dev-server launch commands.

/// Script tokens the yarn toolchain runs to start the dev server.
pub const YARN_SERVE_COMMAND: &[&str] = &["server"];
/// Script tokens the npm toolchain runs to start the dev server.
pub const NPM_SERVE_COMMAND: &[&str] = &["run-script", "server"];

// npm requires an explicit delimiter before passthrough options; yarn
// forwards them as-is.
const NPM_OPTION_SEPARATOR: &str = "--";

/// One invocation variant of the serve command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: &'static str,
    pub args: Vec<String>,
}

impl CommandSpec {
    fn new(program: &'static str, args: Vec<String>) -> Self {
        Self { program, args }
    }

    /// Single-line rendering for logs and reports.
    pub fn rendered(&self) -> String {
        let mut out = String::from(self.program);
        for arg in &self.args {
            out.push(' ');
            out.push_str(arg);
        }
        out
    }
}

/// Assemble the ordered list of serve command variants.
///
/// The executor tries them in order; every variant carries the same option
/// list, independent of which toolchain ends up consuming it.
pub fn serve_commands(options: &[String]) -> Vec<CommandSpec> {
    let yarn_args = YARN_SERVE_COMMAND
        .iter()
        .map(|token| token.to_string())
        .chain(options.iter().cloned())
        .collect();
    let npm_args = NPM_SERVE_COMMAND
        .iter()
        .map(|token| token.to_string())
        .chain(std::iter::once(NPM_OPTION_SEPARATOR.to_string()))
        .chain(options.iter().cloned())
        .collect();

    vec![
        CommandSpec::new("yarn", yarn_args),
        CommandSpec::new("npm", npm_args),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yarn_variant_appends_options_directly() {
        let commands = serve_commands(&["--port=1".to_string()]);

        assert_eq!(commands[0].program, "yarn");
        assert_eq!(commands[0].args, vec!["server", "--port=1"]);
    }

    #[test]
    fn npm_variant_inserts_passthrough_separator() {
        let commands = serve_commands(&["--port=1".to_string()]);

        assert_eq!(commands[1].program, "npm");
        assert_eq!(
            commands[1].args,
            vec!["run-script", "server", "--", "--port=1"]
        );
    }

    #[test]
    fn variants_share_the_same_option_list() {
        let options = vec!["--port=39351".to_string(), "--name=Demo".to_string()];
        let commands = serve_commands(&options);

        for spec in &commands {
            let tail: Vec<&str> = spec
                .args
                .iter()
                .rev()
                .take(options.len())
                .rev()
                .map(String::as_str)
                .collect();
            assert_eq!(tail, vec!["--port=39351", "--name=Demo"]);
        }
    }

    #[test]
    fn empty_options_still_produce_both_variants() {
        let commands = serve_commands(&[]);

        assert_eq!(commands.len(), 2);
        assert_eq!(commands[0].args, vec!["server"]);
        assert_eq!(commands[1].args, vec!["run-script", "server", "--"]);
    }

    #[test]
    fn rendered_joins_program_and_args() {
        let commands = serve_commands(&["--port=1".to_string()]);
        assert_eq!(commands[0].rendered(), "yarn server --port=1");
        assert_eq!(commands[1].rendered(), "npm run-script server -- --port=1");
    }
}
