//  ____  ____     __        __    __  __      _
// |  _ \|  _ \ __ \ \      / /__ |  \/  | ___| |_ ___ _ __
// | |_) | |_) / _` \ \/\ / / _ \| |\/| |/ _ \ __/ _ \ '__|
// |  _ <|  __/ (_| |\ V  V / (_) | |  | |  __/ ||  __/ |
// |_| \_\_|   \__,_| \_/\_/ \___/|_|  |_|\___|\__\___|_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2026-10-18
// Version : 0.1.0
// License : Mulan PSL v2
//
// Random password generator and strength meter.

pub mod commands;
pub mod configtool;
pub mod passgen;
pub mod report;
pub mod strength;
