//! Help and manual pages
//!
//! Static usage text for every shell command.

/// One manual entry: command name and its usage lines
struct ManualPage {
    name: &'static str,
    usage: &'static [&'static str],
}

const PAGES: &[ManualPage] = &[
    ManualPage {
        name: "pwd",
        usage: &["pwd - print the path of the current directory"],
    },
    ManualPage {
        name: "ls",
        usage: &[
            "ls [name] - list the current directory",
            "    with [name], list the child directory [name] instead",
        ],
    },
    ManualPage {
        name: "cd",
        usage: &[
            "cd [name] - enter the child directory [name]",
            "    cd .. moves to the parent directory",
        ],
    },
    ManualPage {
        name: "mkdir",
        usage: &[
            "mkdir [name] - create the empty directory [name]",
            "    an existing entry with that name is replaced",
        ],
    },
    ManualPage {
        name: "touch",
        usage: &[
            "touch [name] - create the empty file [name]",
            "    an existing entry with that name is replaced",
        ],
    },
    ManualPage {
        name: "cat",
        usage: &["cat [name] - print the content of the file [name]"],
    },
    ManualPage {
        name: "write",
        usage: &["write [name] [content] - replace the content of the file [name] with [content]"],
    },
    ManualPage {
        name: "rm",
        usage: &["rm [name] - delete the file or directory [name] with everything in it"],
    },
    ManualPage {
        name: "mv",
        usage: &["mv [oldName] [newName] - rename [oldName] to [newName]"],
    },
    ManualPage {
        name: "chmod",
        usage: &[
            "chmod [name] [mode] - set the permissions of the file [name]",
            "    0 - no access, 1 - read only, 2 - write only, 3 - read and write",
        ],
    },
    ManualPage {
        name: "clear",
        usage: &["clear - clear the screen"],
    },
    ManualPage {
        name: "help",
        usage: &["help - list the available commands"],
    },
    ManualPage {
        name: "man",
        usage: &["man [command] - show how to use [command]"],
    },
];

/// Summary printed by `help`
pub fn help_lines() -> Vec<String> {
    let mut lines = vec!["Available commands:".to_string()];
    lines.extend(PAGES.iter().map(|page| format!("  {}", page.usage[0])));
    lines.push("  exit - leave the shell".to_string());
    lines
}

/// Usage text of `name`, if it has a manual page
pub fn manual_page(name: &str) -> Option<Vec<String>> {
    PAGES
        .iter()
        .find(|page| page.name == name)
        .map(|page| page.usage.iter().map(|line| line.to_string()).collect())
}
