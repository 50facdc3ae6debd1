#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy, Default)]
pub enum Status {
    #[default]
    Dead,
    Alive,
}

impl From<bool> for Status {
    fn from(alive: bool) -> Self {
        if alive {
            Status::Alive
        } else {
            Status::Dead
        }
    }
}

/// A single grid slot: the status of the current generation plus the status
/// computed for the next one, which is only applied by `advance`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    status: Status,
    next: Status,
}

impl Cell {
    pub fn new(status: Status) -> Cell {
        Cell {
            status,
            next: status,
        }
    }

    /// Wraps status
    pub fn alive(&self) -> bool {
        self.status == Status::Alive
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn set_alive(&mut self, alive: bool) {
        self.status = Status::from(alive);
    }

    // Returns the next status given a number of live neighbours
    // https://en.wikipedia.org/wiki/Conway%27s_Game_of_Life#Rules
    pub fn next_status(&self, neighbours_cnt: usize) -> Status {
        match (self.status, neighbours_cnt) {
            (_, 3) => Status::Alive,
            (Status::Alive, 2) => Status::Alive,
            _ => Status::Dead,
        }
    }

    /// Computes the pending status from the live neighbour count of the
    /// current generation. The current status is left untouched.
    pub fn determine_next_state(&mut self, neighbours_cnt: usize) {
        self.next = self.next_status(neighbours_cnt);
    }

    /// Applies the pending status.
    pub fn advance(&mut self) {
        self.status = self.next;
    }
}
