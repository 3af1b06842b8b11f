//   ____                      _            ____                       _
//  / ___| _ __  _   _  _ __  | |_   __ _  / ___|  ___   _   _  _ __  | |_
// | |    | '__|| | | || '_ \ | __| / _` || |     / _ \ | | | || '_ \ | __|
// | |___ | |   | |_| || |_) || |_ | (_| || |___ | (_) || |_| || | | || |_
//  \____||_|    \__, || .__/  \__| \__,_| \____| \___/  \__,_||_| |_| \__|
//               |___/ |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-18
// Version : 0.1.0
// License : Mulan PSL v2
//
// Password policy search-space and entropy analyzer

pub mod charclass;
pub mod passgen;
pub mod policy;
pub mod report;
pub mod searchspace;
