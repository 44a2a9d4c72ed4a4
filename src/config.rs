use crate::bitboard::BitBoard;

pub const BOARD_SIZE: u8 = 10;

/// Cell set sized for the standard board.
pub type BB = BitBoard<u128, { BOARD_SIZE as usize }>;

/// One kind of ship in a fleet: its length in decks and how many of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipClass {
    name: &'static str,
    length: usize,
    count: usize,
}

impl ShipClass {
    pub const fn new(name: &'static str, length: usize, count: usize) -> Self {
        Self {
            name,
            length,
            count,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

pub const STANDARD_FLEET: [ShipClass; 4] = [
    ShipClass::new("Battleship", 4, 1),
    ShipClass::new("Cruiser", 3, 2),
    ShipClass::new("Destroyer", 2, 3),
    ShipClass::new("Submarine", 1, 4),
];

/// Number of ships in the standard fleet.
pub const FLEET_SIZE: usize = 1 + 2 + 3 + 4;

/// Total number of decks in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 4 + 3 * 2 + 2 * 3 + 4;

/// Fleet composition a layout is validated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FleetRules<'a> {
    classes: &'a [ShipClass],
}

impl<'a> FleetRules<'a> {
    pub const fn new(classes: &'a [ShipClass]) -> Self {
        Self { classes }
    }

    pub fn classes(&self) -> &'a [ShipClass] {
        self.classes
    }

    /// Number of ships a legal layout has.
    pub fn ship_count(&self) -> usize {
        self.classes.iter().map(ShipClass::count).sum()
    }

    /// Ships of `length` decks a legal layout has, summed over every class
    /// of that length.
    pub fn expected_count(&self, length: usize) -> usize {
        self.classes
            .iter()
            .filter(|c| c.length == length)
            .map(ShipClass::count)
            .sum()
    }

    /// Class for ships of `length` decks, if the rules have one.
    pub fn class_for(&self, length: usize) -> Option<&'a ShipClass> {
        self.classes.iter().find(|c| c.length == length)
    }
}

pub const STANDARD_RULES: FleetRules<'static> = FleetRules::new(&STANDARD_FLEET);
