use std::{
    fmt::Display,
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    str::FromStr,
};

use omok::{GameState, Grid, Rules, Symmetric, Symmetry};

use crate::{
    error::Error,
    repr::{game_repr, EncodingMode, StateTensor},
    sys_time,
};

/// A searched position whose game has not finished yet.
#[derive(Clone, Debug)]
pub struct IncompleteExample {
    pub state: GameState,
    pub policy: Vec<f32>,
}

impl IncompleteExample {
    #[must_use]
    pub fn complete(self, value: f32) -> Example {
        Example {
            state: self.state,
            policy: self.policy,
            value,
        }
    }
}

/// A training target.
/// `policy` covers every cell and `value` is the final result for the mover of `state`.
#[derive(Clone, Debug, PartialEq)]
pub struct Example {
    pub state: GameState,
    pub policy: Vec<f32>,
    pub value: f32,
}

impl Example {
    /// Input planes, policy target and value target.
    /// With `augment` every symmetry of the board is included.
    pub fn to_tensors(&self, mode: EncodingMode, augment: bool) -> Vec<(StateTensor, Vec<f32>, f32)> {
        let rules = self.state.rules();
        let symmetries = if augment {
            rules.symmetries().into_iter().collect()
        } else {
            vec![Symmetry::Identity]
        };
        symmetries
            .into_iter()
            .map(|symmetry| {
                (
                    game_repr(&self.state.transform(symmetry), mode),
                    symmetry.apply(rules.rows(), rules.cols(), &self.policy),
                    self.value,
                )
            })
            .collect()
    }
}

fn join<T: Display>(items: impl IntoIterator<Item = T>) -> String {
    items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

impl Display for Example {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rules = self.state.rules();
        write!(
            f,
            "{} {} {};{};{};",
            rules.rows(),
            rules.cols(),
            rules.win_length(),
            join(self.state.own().cells()),
            join(self.state.opponent().cells()),
        )?;
        match self.state.last_action() {
            Some(action) => write!(f, "{action}")?,
            None => write!(f, "-")?,
        }
        write!(f, ";{};{}", self.value, join(&self.policy))
    }
}

fn parse_list<T: FromStr>(chunk: &str, what: &str) -> Result<Vec<T>, Error> {
    chunk
        .split_terminator(',')
        .map(|item| {
            item.trim()
                .parse()
                .map_err(|_| Error::Parse(format!("invalid {what} `{item}`")))
        })
        .collect()
}

impl FromStr for Example {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chunks: Vec<_> = s.trim().split(';').collect();
        let [dims, own, opponent, last, value, policy] = chunks[..] else {
            return Err(Error::Parse(format!("expected 6 fields, found {}", chunks.len())));
        };

        let dims: Vec<usize> = dims
            .split_whitespace()
            .map(|x| x.parse().map_err(|_| Error::Parse(format!("invalid dimension `{x}`"))))
            .collect::<Result<_, _>>()?;
        let [rows, cols, win_length] = dims[..] else {
            return Err(Error::Parse("expected rows, columns and winning length".into()));
        };
        let rules = Rules::new(rows, cols, win_length)?;

        let grid = |chunk: &str| -> Result<Grid, Error> {
            Grid::from_cells(rules.n_actions(), parse_list::<usize>(chunk, "cell")?)
                .ok_or_else(|| Error::Parse("cell is not on the board".into()))
        };
        let last_action = match last.trim() {
            "-" => None,
            action => Some(
                action
                    .parse()
                    .map_err(|_| Error::Parse(format!("invalid last action `{action}`")))?,
            ),
        };
        let state = GameState::from_grids(rules, grid(own)?, grid(opponent)?, last_action)?;

        let value = value
            .trim()
            .parse()
            .map_err(|_| Error::Parse(format!("invalid value `{value}`")))?;
        let policy: Vec<f32> = parse_list(policy, "probability")?;
        if policy.len() != rules.n_actions() {
            return Err(Error::Parse(format!(
                "policy has {} entries, expected {}",
                policy.len(),
                rules.n_actions()
            )));
        }

        Ok(Example { state, policy, value })
    }
}

/// Write examples to `{dir}/{unix time}.data`, one per line.
pub fn save_examples(dir: impl AsRef<Path>, examples: &[Example]) -> Result<PathBuf, Error> {
    let path = dir.as_ref().join(format!("{}.data", sys_time()));
    let mut file = BufWriter::new(File::create(&path)?);
    for example in examples {
        writeln!(file, "{example}")?;
    }
    file.flush()?;
    Ok(path)
}

pub fn load_examples(path: impl AsRef<Path>) -> Result<Vec<Example>, Error> {
    fs::read_to_string(path)?
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::parse)
        .collect()
}
