// Written by ditto-tones-tools from data/tailwind.hjson and data/radix.hjson

use lazy_static::lazy_static;
pub(crate) mod ty;
use ty::*;

// Tailwind CSS v4 default palette, number of ramps: 22
lazy_static! {
  pub(crate) static ref TAILWIND: RampSetData = RampSetData {
    neutrals: vec!["slate", "gray", "zinc", "neutral", "stone"],
    ramps: vec![
      RampData { name: "slate", shades: vec![
        ("50", Oklch { l: 0.984000, c: 0.003000, h: 247.858000 }),
        ("100", Oklch { l: 0.968000, c: 0.007000, h: 247.896000 }),
        ("200", Oklch { l: 0.929000, c: 0.013000, h: 255.508000 }),
        ("300", Oklch { l: 0.869000, c: 0.022000, h: 252.894000 }),
        ("400", Oklch { l: 0.704000, c: 0.040000, h: 256.788000 }),
        ("500", Oklch { l: 0.554000, c: 0.046000, h: 257.417000 }),
        ("600", Oklch { l: 0.446000, c: 0.043000, h: 257.281000 }),
        ("700", Oklch { l: 0.372000, c: 0.044000, h: 257.287000 }),
        ("800", Oklch { l: 0.279000, c: 0.041000, h: 260.031000 }),
        ("900", Oklch { l: 0.208000, c: 0.042000, h: 265.755000 }),
        ("950", Oklch { l: 0.129000, c: 0.042000, h: 264.695000 }),
      ]},
      RampData { name: "gray", shades: vec![
        ("50", Oklch { l: 0.985000, c: 0.002000, h: 247.839000 }),
        ("100", Oklch { l: 0.967000, c: 0.003000, h: 264.542000 }),
        ("200", Oklch { l: 0.928000, c: 0.006000, h: 264.531000 }),
        ("300", Oklch { l: 0.872000, c: 0.010000, h: 258.338000 }),
        ("400", Oklch { l: 0.707000, c: 0.022000, h: 261.325000 }),
        ("500", Oklch { l: 0.551000, c: 0.027000, h: 264.364000 }),
        ("600", Oklch { l: 0.446000, c: 0.030000, h: 256.802000 }),
        ("700", Oklch { l: 0.373000, c: 0.034000, h: 259.733000 }),
        ("800", Oklch { l: 0.278000, c: 0.033000, h: 256.848000 }),
        ("900", Oklch { l: 0.210000, c: 0.034000, h: 264.665000 }),
        ("950", Oklch { l: 0.130000, c: 0.028000, h: 261.692000 }),
      ]},
      RampData { name: "zinc", shades: vec![
        ("50", Oklch { l: 0.985000, c: 0.000000, h:   0.000000 }),
        ("100", Oklch { l: 0.967000, c: 0.001000, h: 286.375000 }),
        ("200", Oklch { l: 0.920000, c: 0.004000, h: 286.320000 }),
        ("300", Oklch { l: 0.871000, c: 0.006000, h: 286.286000 }),
        ("400", Oklch { l: 0.705000, c: 0.015000, h: 286.067000 }),
        ("500", Oklch { l: 0.552000, c: 0.016000, h: 285.938000 }),
        ("600", Oklch { l: 0.442000, c: 0.017000, h: 285.786000 }),
        ("700", Oklch { l: 0.370000, c: 0.013000, h: 285.805000 }),
        ("800", Oklch { l: 0.274000, c: 0.006000, h: 286.033000 }),
        ("900", Oklch { l: 0.210000, c: 0.006000, h: 285.885000 }),
        ("950", Oklch { l: 0.141000, c: 0.005000, h: 285.823000 }),
      ]},
      RampData { name: "neutral", shades: vec![
        ("50", Oklch { l: 0.985000, c: 0.000000, h:   0.000000 }),
        ("100", Oklch { l: 0.970000, c: 0.000000, h:   0.000000 }),
        ("200", Oklch { l: 0.922000, c: 0.000000, h:   0.000000 }),
        ("300", Oklch { l: 0.870000, c: 0.000000, h:   0.000000 }),
        ("400", Oklch { l: 0.708000, c: 0.000000, h:   0.000000 }),
        ("500", Oklch { l: 0.556000, c: 0.000000, h:   0.000000 }),
        ("600", Oklch { l: 0.439000, c: 0.000000, h:   0.000000 }),
        ("700", Oklch { l: 0.371000, c: 0.000000, h:   0.000000 }),
        ("800", Oklch { l: 0.269000, c: 0.000000, h:   0.000000 }),
        ("900", Oklch { l: 0.205000, c: 0.000000, h:   0.000000 }),
        ("950", Oklch { l: 0.145000, c: 0.000000, h:   0.000000 }),
      ]},
      RampData { name: "stone", shades: vec![
        ("50", Oklch { l: 0.985000, c: 0.001000, h: 106.423000 }),
        ("100", Oklch { l: 0.970000, c: 0.001000, h: 106.424000 }),
        ("200", Oklch { l: 0.923000, c: 0.003000, h:  48.717000 }),
        ("300", Oklch { l: 0.869000, c: 0.005000, h:  56.366000 }),
        ("400", Oklch { l: 0.709000, c: 0.010000, h:  56.259000 }),
        ("500", Oklch { l: 0.553000, c: 0.013000, h:  58.071000 }),
        ("600", Oklch { l: 0.444000, c: 0.011000, h:  73.639000 }),
        ("700", Oklch { l: 0.374000, c: 0.010000, h:  67.558000 }),
        ("800", Oklch { l: 0.268000, c: 0.007000, h:  34.298000 }),
        ("900", Oklch { l: 0.216000, c: 0.006000, h:  56.043000 }),
        ("950", Oklch { l: 0.147000, c: 0.004000, h:  49.250000 }),
      ]},
      RampData { name: "red", shades: vec![
        ("50", Oklch { l: 0.971000, c: 0.013000, h:  17.380000 }),
        ("100", Oklch { l: 0.936000, c: 0.032000, h:  17.717000 }),
        ("200", Oklch { l: 0.885000, c: 0.062000, h:  18.334000 }),
        ("300", Oklch { l: 0.808000, c: 0.114000, h:  19.571000 }),
        ("400", Oklch { l: 0.704000, c: 0.191000, h:  22.216000 }),
        ("500", Oklch { l: 0.637000, c: 0.237000, h:  25.331000 }),
        ("600", Oklch { l: 0.577000, c: 0.245000, h:  27.325000 }),
        ("700", Oklch { l: 0.505000, c: 0.213000, h:  27.518000 }),
        ("800", Oklch { l: 0.444000, c: 0.177000, h:  26.899000 }),
        ("900", Oklch { l: 0.396000, c: 0.141000, h:  25.723000 }),
        ("950", Oklch { l: 0.258000, c: 0.092000, h:  26.042000 }),
      ]},
      RampData { name: "orange", shades: vec![
        ("50", Oklch { l: 0.980000, c: 0.016000, h:  73.684000 }),
        ("100", Oklch { l: 0.954000, c: 0.038000, h:  75.164000 }),
        ("200", Oklch { l: 0.901000, c: 0.076000, h:  70.697000 }),
        ("300", Oklch { l: 0.837000, c: 0.128000, h:  66.290000 }),
        ("400", Oklch { l: 0.750000, c: 0.183000, h:  55.934000 }),
        ("500", Oklch { l: 0.705000, c: 0.213000, h:  47.604000 }),
        ("600", Oklch { l: 0.646000, c: 0.222000, h:  41.116000 }),
        ("700", Oklch { l: 0.553000, c: 0.195000, h:  38.402000 }),
        ("800", Oklch { l: 0.470000, c: 0.157000, h:  37.304000 }),
        ("900", Oklch { l: 0.408000, c: 0.123000, h:  38.172000 }),
        ("950", Oklch { l: 0.266000, c: 0.079000, h:  36.259000 }),
      ]},
      RampData { name: "amber", shades: vec![
        ("50", Oklch { l: 0.987000, c: 0.022000, h:  95.277000 }),
        ("100", Oklch { l: 0.962000, c: 0.059000, h:  95.617000 }),
        ("200", Oklch { l: 0.924000, c: 0.120000, h:  95.746000 }),
        ("300", Oklch { l: 0.879000, c: 0.169000, h:  91.605000 }),
        ("400", Oklch { l: 0.828000, c: 0.189000, h:  84.429000 }),
        ("500", Oklch { l: 0.769000, c: 0.188000, h:  70.080000 }),
        ("600", Oklch { l: 0.666000, c: 0.179000, h:  58.318000 }),
        ("700", Oklch { l: 0.555000, c: 0.163000, h:  48.998000 }),
        ("800", Oklch { l: 0.473000, c: 0.137000, h:  46.201000 }),
        ("900", Oklch { l: 0.414000, c: 0.112000, h:  45.904000 }),
        ("950", Oklch { l: 0.279000, c: 0.077000, h:  45.635000 }),
      ]},
      RampData { name: "yellow", shades: vec![
        ("50", Oklch { l: 0.987000, c: 0.026000, h: 102.212000 }),
        ("100", Oklch { l: 0.973000, c: 0.071000, h: 103.193000 }),
        ("200", Oklch { l: 0.945000, c: 0.129000, h: 101.540000 }),
        ("300", Oklch { l: 0.905000, c: 0.182000, h:  98.111000 }),
        ("400", Oklch { l: 0.852000, c: 0.199000, h:  91.936000 }),
        ("500", Oklch { l: 0.795000, c: 0.184000, h:  86.047000 }),
        ("600", Oklch { l: 0.681000, c: 0.162000, h:  75.834000 }),
        ("700", Oklch { l: 0.554000, c: 0.135000, h:  66.442000 }),
        ("800", Oklch { l: 0.476000, c: 0.114000, h:  61.907000 }),
        ("900", Oklch { l: 0.421000, c: 0.095000, h:  57.708000 }),
        ("950", Oklch { l: 0.286000, c: 0.066000, h:  53.813000 }),
      ]},
      RampData { name: "lime", shades: vec![
        ("50", Oklch { l: 0.986000, c: 0.031000, h: 120.757000 }),
        ("100", Oklch { l: 0.967000, c: 0.067000, h: 122.328000 }),
        ("200", Oklch { l: 0.938000, c: 0.127000, h: 124.321000 }),
        ("300", Oklch { l: 0.897000, c: 0.196000, h: 126.665000 }),
        ("400", Oklch { l: 0.841000, c: 0.238000, h: 128.850000 }),
        ("500", Oklch { l: 0.768000, c: 0.233000, h: 130.850000 }),
        ("600", Oklch { l: 0.648000, c: 0.200000, h: 131.684000 }),
        ("700", Oklch { l: 0.532000, c: 0.157000, h: 131.589000 }),
        ("800", Oklch { l: 0.453000, c: 0.124000, h: 130.933000 }),
        ("900", Oklch { l: 0.405000, c: 0.101000, h: 131.063000 }),
        ("950", Oklch { l: 0.274000, c: 0.072000, h: 132.109000 }),
      ]},
      RampData { name: "green", shades: vec![
        ("50", Oklch { l: 0.982000, c: 0.018000, h: 155.826000 }),
        ("100", Oklch { l: 0.962000, c: 0.044000, h: 156.743000 }),
        ("200", Oklch { l: 0.925000, c: 0.084000, h: 155.995000 }),
        ("300", Oklch { l: 0.871000, c: 0.150000, h: 154.449000 }),
        ("400", Oklch { l: 0.792000, c: 0.209000, h: 151.711000 }),
        ("500", Oklch { l: 0.723000, c: 0.219000, h: 149.579000 }),
        ("600", Oklch { l: 0.627000, c: 0.194000, h: 149.214000 }),
        ("700", Oklch { l: 0.527000, c: 0.154000, h: 150.069000 }),
        ("800", Oklch { l: 0.448000, c: 0.119000, h: 151.328000 }),
        ("900", Oklch { l: 0.393000, c: 0.095000, h: 152.535000 }),
        ("950", Oklch { l: 0.266000, c: 0.065000, h: 152.934000 }),
      ]},
      RampData { name: "emerald", shades: vec![
        ("50", Oklch { l: 0.979000, c: 0.021000, h: 166.113000 }),
        ("100", Oklch { l: 0.950000, c: 0.052000, h: 163.051000 }),
        ("200", Oklch { l: 0.905000, c: 0.093000, h: 164.150000 }),
        ("300", Oklch { l: 0.845000, c: 0.143000, h: 164.978000 }),
        ("400", Oklch { l: 0.765000, c: 0.177000, h: 163.223000 }),
        ("500", Oklch { l: 0.696000, c: 0.170000, h: 162.480000 }),
        ("600", Oklch { l: 0.596000, c: 0.145000, h: 163.225000 }),
        ("700", Oklch { l: 0.508000, c: 0.118000, h: 165.612000 }),
        ("800", Oklch { l: 0.432000, c: 0.095000, h: 166.913000 }),
        ("900", Oklch { l: 0.378000, c: 0.077000, h: 168.940000 }),
        ("950", Oklch { l: 0.262000, c: 0.051000, h: 172.552000 }),
      ]},
      RampData { name: "teal", shades: vec![
        ("50", Oklch { l: 0.984000, c: 0.014000, h: 180.720000 }),
        ("100", Oklch { l: 0.953000, c: 0.051000, h: 180.801000 }),
        ("200", Oklch { l: 0.910000, c: 0.096000, h: 180.426000 }),
        ("300", Oklch { l: 0.855000, c: 0.138000, h: 181.071000 }),
        ("400", Oklch { l: 0.777000, c: 0.152000, h: 181.912000 }),
        ("500", Oklch { l: 0.704000, c: 0.140000, h: 182.503000 }),
        ("600", Oklch { l: 0.600000, c: 0.118000, h: 184.704000 }),
        ("700", Oklch { l: 0.511000, c: 0.096000, h: 186.391000 }),
        ("800", Oklch { l: 0.437000, c: 0.078000, h: 188.216000 }),
        ("900", Oklch { l: 0.386000, c: 0.063000, h: 188.416000 }),
        ("950", Oklch { l: 0.277000, c: 0.046000, h: 192.524000 }),
      ]},
      RampData { name: "cyan", shades: vec![
        ("50", Oklch { l: 0.984000, c: 0.019000, h: 200.873000 }),
        ("100", Oklch { l: 0.956000, c: 0.045000, h: 203.388000 }),
        ("200", Oklch { l: 0.917000, c: 0.080000, h: 205.041000 }),
        ("300", Oklch { l: 0.865000, c: 0.127000, h: 207.078000 }),
        ("400", Oklch { l: 0.789000, c: 0.154000, h: 211.530000 }),
        ("500", Oklch { l: 0.715000, c: 0.143000, h: 215.221000 }),
        ("600", Oklch { l: 0.609000, c: 0.126000, h: 221.723000 }),
        ("700", Oklch { l: 0.520000, c: 0.105000, h: 223.128000 }),
        ("800", Oklch { l: 0.450000, c: 0.085000, h: 224.283000 }),
        ("900", Oklch { l: 0.398000, c: 0.070000, h: 227.392000 }),
        ("950", Oklch { l: 0.302000, c: 0.056000, h: 229.695000 }),
      ]},
      RampData { name: "sky", shades: vec![
        ("50", Oklch { l: 0.977000, c: 0.013000, h: 236.620000 }),
        ("100", Oklch { l: 0.951000, c: 0.026000, h: 236.824000 }),
        ("200", Oklch { l: 0.901000, c: 0.058000, h: 230.902000 }),
        ("300", Oklch { l: 0.828000, c: 0.111000, h: 230.318000 }),
        ("400", Oklch { l: 0.746000, c: 0.160000, h: 232.661000 }),
        ("500", Oklch { l: 0.685000, c: 0.169000, h: 237.323000 }),
        ("600", Oklch { l: 0.588000, c: 0.158000, h: 241.966000 }),
        ("700", Oklch { l: 0.500000, c: 0.134000, h: 242.749000 }),
        ("800", Oklch { l: 0.443000, c: 0.110000, h: 240.790000 }),
        ("900", Oklch { l: 0.391000, c: 0.090000, h: 240.876000 }),
        ("950", Oklch { l: 0.293000, c: 0.066000, h: 243.157000 }),
      ]},
      RampData { name: "blue", shades: vec![
        ("50", Oklch { l: 0.970000, c: 0.014000, h: 254.604000 }),
        ("100", Oklch { l: 0.932000, c: 0.032000, h: 255.585000 }),
        ("200", Oklch { l: 0.882000, c: 0.059000, h: 254.128000 }),
        ("300", Oklch { l: 0.809000, c: 0.105000, h: 251.813000 }),
        ("400", Oklch { l: 0.707000, c: 0.165000, h: 254.624000 }),
        ("500", Oklch { l: 0.623000, c: 0.214000, h: 259.815000 }),
        ("600", Oklch { l: 0.546000, c: 0.245000, h: 262.881000 }),
        ("700", Oklch { l: 0.488000, c: 0.243000, h: 264.376000 }),
        ("800", Oklch { l: 0.424000, c: 0.199000, h: 265.638000 }),
        ("900", Oklch { l: 0.379000, c: 0.146000, h: 265.522000 }),
        ("950", Oklch { l: 0.282000, c: 0.091000, h: 267.935000 }),
      ]},
      RampData { name: "indigo", shades: vec![
        ("50", Oklch { l: 0.962000, c: 0.018000, h: 272.314000 }),
        ("100", Oklch { l: 0.930000, c: 0.034000, h: 272.788000 }),
        ("200", Oklch { l: 0.870000, c: 0.065000, h: 274.039000 }),
        ("300", Oklch { l: 0.785000, c: 0.115000, h: 274.713000 }),
        ("400", Oklch { l: 0.673000, c: 0.182000, h: 276.935000 }),
        ("500", Oklch { l: 0.585000, c: 0.233000, h: 277.117000 }),
        ("600", Oklch { l: 0.511000, c: 0.262000, h: 276.966000 }),
        ("700", Oklch { l: 0.457000, c: 0.240000, h: 277.023000 }),
        ("800", Oklch { l: 0.398000, c: 0.195000, h: 277.366000 }),
        ("900", Oklch { l: 0.359000, c: 0.144000, h: 278.697000 }),
        ("950", Oklch { l: 0.257000, c: 0.090000, h: 281.288000 }),
      ]},
      RampData { name: "violet", shades: vec![
        ("50", Oklch { l: 0.969000, c: 0.016000, h: 293.756000 }),
        ("100", Oklch { l: 0.943000, c: 0.029000, h: 294.588000 }),
        ("200", Oklch { l: 0.894000, c: 0.057000, h: 293.283000 }),
        ("300", Oklch { l: 0.811000, c: 0.111000, h: 293.571000 }),
        ("400", Oklch { l: 0.702000, c: 0.183000, h: 293.541000 }),
        ("500", Oklch { l: 0.606000, c: 0.250000, h: 292.717000 }),
        ("600", Oklch { l: 0.541000, c: 0.281000, h: 293.009000 }),
        ("700", Oklch { l: 0.491000, c: 0.270000, h: 292.581000 }),
        ("800", Oklch { l: 0.432000, c: 0.232000, h: 292.759000 }),
        ("900", Oklch { l: 0.380000, c: 0.189000, h: 293.745000 }),
        ("950", Oklch { l: 0.283000, c: 0.141000, h: 291.089000 }),
      ]},
      RampData { name: "purple", shades: vec![
        ("50", Oklch { l: 0.977000, c: 0.014000, h: 308.299000 }),
        ("100", Oklch { l: 0.946000, c: 0.033000, h: 307.174000 }),
        ("200", Oklch { l: 0.902000, c: 0.063000, h: 306.703000 }),
        ("300", Oklch { l: 0.827000, c: 0.119000, h: 306.383000 }),
        ("400", Oklch { l: 0.714000, c: 0.203000, h: 305.504000 }),
        ("500", Oklch { l: 0.627000, c: 0.265000, h: 303.900000 }),
        ("600", Oklch { l: 0.558000, c: 0.288000, h: 302.321000 }),
        ("700", Oklch { l: 0.496000, c: 0.265000, h: 301.924000 }),
        ("800", Oklch { l: 0.438000, c: 0.218000, h: 303.724000 }),
        ("900", Oklch { l: 0.381000, c: 0.176000, h: 304.987000 }),
        ("950", Oklch { l: 0.291000, c: 0.149000, h: 302.717000 }),
      ]},
      RampData { name: "fuchsia", shades: vec![
        ("50", Oklch { l: 0.977000, c: 0.017000, h: 320.058000 }),
        ("100", Oklch { l: 0.952000, c: 0.037000, h: 318.852000 }),
        ("200", Oklch { l: 0.903000, c: 0.076000, h: 319.620000 }),
        ("300", Oklch { l: 0.833000, c: 0.145000, h: 321.434000 }),
        ("400", Oklch { l: 0.740000, c: 0.238000, h: 322.160000 }),
        ("500", Oklch { l: 0.667000, c: 0.295000, h: 322.150000 }),
        ("600", Oklch { l: 0.591000, c: 0.293000, h: 322.896000 }),
        ("700", Oklch { l: 0.518000, c: 0.253000, h: 323.949000 }),
        ("800", Oklch { l: 0.452000, c: 0.211000, h: 324.591000 }),
        ("900", Oklch { l: 0.401000, c: 0.170000, h: 325.612000 }),
        ("950", Oklch { l: 0.293000, c: 0.136000, h: 325.661000 }),
      ]},
      RampData { name: "pink", shades: vec![
        ("50", Oklch { l: 0.971000, c: 0.014000, h: 343.198000 }),
        ("100", Oklch { l: 0.948000, c: 0.028000, h: 342.258000 }),
        ("200", Oklch { l: 0.899000, c: 0.061000, h: 343.231000 }),
        ("300", Oklch { l: 0.823000, c: 0.120000, h: 346.018000 }),
        ("400", Oklch { l: 0.718000, c: 0.202000, h: 349.761000 }),
        ("500", Oklch { l: 0.656000, c: 0.241000, h: 354.308000 }),
        ("600", Oklch { l: 0.592000, c: 0.249000, h:   0.584000 }),
        ("700", Oklch { l: 0.525000, c: 0.223000, h:   3.958000 }),
        ("800", Oklch { l: 0.459000, c: 0.187000, h:   3.815000 }),
        ("900", Oklch { l: 0.408000, c: 0.153000, h:   2.432000 }),
        ("950", Oklch { l: 0.284000, c: 0.109000, h:   3.907000 }),
      ]},
      RampData { name: "rose", shades: vec![
        ("50", Oklch { l: 0.969000, c: 0.015000, h:  12.422000 }),
        ("100", Oklch { l: 0.941000, c: 0.030000, h:  12.580000 }),
        ("200", Oklch { l: 0.892000, c: 0.058000, h:  10.001000 }),
        ("300", Oklch { l: 0.810000, c: 0.117000, h:  11.638000 }),
        ("400", Oklch { l: 0.712000, c: 0.194000, h:  13.428000 }),
        ("500", Oklch { l: 0.645000, c: 0.246000, h:  16.439000 }),
        ("600", Oklch { l: 0.586000, c: 0.253000, h:  17.585000 }),
        ("700", Oklch { l: 0.514000, c: 0.222000, h:  16.935000 }),
        ("800", Oklch { l: 0.455000, c: 0.188000, h:  13.697000 }),
        ("900", Oklch { l: 0.410000, c: 0.159000, h:  10.272000 }),
        ("950", Oklch { l: 0.271000, c: 0.105000, h:  12.094000 }),
      ]},
    ]
  };
}

// Radix Colors light scales, number of ramps: 19
lazy_static! {
  pub(crate) static ref RADIX: RampSetData = RampSetData {
    neutrals: vec!["gray", "mauve", "slate", "sage", "olive", "sand"],
    ramps: vec![
      RampData { name: "gray", shades: vec![
        ("1", Oklch { l: 0.991069, c: 0.000000, h:   0.000000 }),
        ("2", Oklch { l: 0.982118, c: 0.000000, h:   0.000000 }),
        ("3", Oklch { l: 0.955140, c: 0.000000, h:   0.000000 }),
        ("4", Oklch { l: 0.930999, c: 0.000000, h:   0.000000 }),
        ("5", Oklch { l: 0.906701, c: 0.000000, h:   0.000000 }),
        ("6", Oklch { l: 0.885305, c: 0.000000, h:   0.000000 }),
        ("7", Oklch { l: 0.851419, c: 0.000000, h:   0.000000 }),
        ("8", Oklch { l: 0.792074, c: 0.000000, h:   0.000000 }),
        ("9", Oklch { l: 0.643409, c: 0.000000, h:   0.000000 }),
        ("10", Oklch { l: 0.609986, c: 0.000000, h:   0.000000 }),
        ("11", Oklch { l: 0.503229, c: 0.000000, h:   0.000000 }),
        ("12", Oklch { l: 0.243535, c: 0.000000, h:   0.000000 }),
      ]},
      RampData { name: "mauve", shades: vec![
        ("1", Oklch { l: 0.992108, c: 0.001681, h: 325.589993 }),
        ("2", Oklch { l: 0.983440, c: 0.002834, h: 308.428841 }),
        ("3", Oklch { l: 0.955575, c: 0.006179, h: 317.752724 }),
        ("4", Oklch { l: 0.931726, c: 0.007394, h: 312.299062 }),
        ("5", Oklch { l: 0.908803, c: 0.010328, h: 311.171010 }),
        ("6", Oklch { l: 0.886930, c: 0.011292, h: 303.093525 }),
        ("7", Oklch { l: 0.853669, c: 0.014053, h: 299.761063 }),
        ("8", Oklch { l: 0.794512, c: 0.018281, h: 293.048054 }),
        ("9", Oklch { l: 0.646025, c: 0.019269, h: 292.918343 }),
        ("10", Oklch { l: 0.612304, c: 0.018044, h: 293.512182 }),
        ("11", Oklch { l: 0.504979, c: 0.015831, h: 294.998856 }),
        ("12", Oklch { l: 0.244506, c: 0.013444, h: 298.462846 }),
      ]},
      RampData { name: "slate", shades: vec![
        ("1", Oklch { l: 0.991348, c: 0.001318, h: 286.376006 }),
        ("2", Oklch { l: 0.982679, c: 0.002642, h: 286.351118 }),
        ("3", Oklch { l: 0.955990, c: 0.003992, h: 286.324006 }),
        ("4", Oklch { l: 0.932143, c: 0.005359, h: 286.295312 }),
        ("5", Oklch { l: 0.910418, c: 0.006846, h: 277.155714 }),
        ("6", Oklch { l: 0.887350, c: 0.009507, h: 286.204394 }),
        ("7", Oklch { l: 0.853006, c: 0.011054, h: 280.445887 }),
        ("8", Oklch { l: 0.793843, c: 0.015601, h: 277.789000 }),
        ("9", Oklch { l: 0.645314, c: 0.016454, h: 277.699794 }),
        ("10", Oklch { l: 0.610750, c: 0.015458, h: 272.564977 }),
        ("11", Oklch { l: 0.502489, c: 0.013621, h: 264.444945 }),
        ("12", Oklch { l: 0.241130, c: 0.009691, h: 248.229002 }),
      ]},
      RampData { name: "sage", shades: vec![
        ("1", Oklch { l: 0.992259, c: 0.002482, h: 165.077395 }),
        ("2", Oklch { l: 0.980323, c: 0.002490, h: 165.076404 }),
        ("3", Oklch { l: 0.955583, c: 0.003457, h: 174.481268 }),
        ("4", Oklch { l: 0.931445, c: 0.003479, h: 174.477851 }),
        ("5", Oklch { l: 0.909912, c: 0.004193, h: 157.170878 }),
        ("6", Oklch { l: 0.885758, c: 0.003523, h: 174.470802 }),
        ("7", Oklch { l: 0.850813, c: 0.005153, h: 164.983950 }),
        ("8", Oklch { l: 0.791459, c: 0.005246, h: 164.968812 }),
        ("9", Oklch { l: 0.639205, c: 0.010322, h: 171.607913 }),
        ("10", Oklch { l: 0.605737, c: 0.010456, h: 171.574668 }),
        ("11", Oklch { l: 0.500844, c: 0.008070, h: 174.110878 }),
        ("12", Oklch { l: 0.239603, c: 0.011661, h: 167.556839 }),
      ]},
      RampData { name: "olive", shades: vec![
        ("1", Oklch { l: 0.993013, c: 0.001680, h: 145.562370 }),
        ("2", Oklch { l: 0.983032, c: 0.003369, h: 145.549780 }),
        ("3", Oklch { l: 0.956061, c: 0.003392, h: 145.548880 }),
        ("4", Oklch { l: 0.931927, c: 0.003414, h: 145.548024 }),
        ("5", Oklch { l: 0.909630, c: 0.005152, h: 145.533039 }),
        ("6", Oklch { l: 0.885189, c: 0.005187, h: 145.531562 }),
        ("7", Oklch { l: 0.851302, c: 0.005237, h: 145.529354 }),
        ("8", Oklch { l: 0.791668, c: 0.006474, h: 137.776665 }),
        ("9", Oklch { l: 0.640437, c: 0.011791, h: 136.582397 }),
        ("10", Oklch { l: 0.606982, c: 0.011949, h: 136.586422 }),
        ("11", Oklch { l: 0.500421, c: 0.011214, h: 140.496781 }),
        ("12", Oklch { l: 0.241747, c: 0.011049, h: 139.433948 }),
      ]},
      RampData { name: "sand", shades: vec![
        ("1", Oklch { l: 0.993770, c: 0.001316, h: 106.423069 }),
        ("2", Oklch { l: 0.981839, c: 0.001320, h: 106.423439 }),
        ("3", Oklch { l: 0.955627, c: 0.001719, h:  67.802009 }),
        ("4", Oklch { l: 0.931209, c: 0.002896, h:  84.559383 }),
        ("5", Oklch { l: 0.909678, c: 0.004188, h:  91.449453 }),
        ("6", Oklch { l: 0.885236, c: 0.004217, h:  91.450836 }),
        ("7", Oklch { l: 0.851067, c: 0.005586, h:  95.110954 }),
        ("8", Oklch { l: 0.791147, c: 0.008421, h:  98.912144 }),
        ("9", Oklch { l: 0.641298, c: 0.010232, h: 106.684629 }),
        ("10", Oklch { l: 0.604779, c: 0.008904, h: 106.662833 }),
        ("11", Oklch { l: 0.498088, c: 0.007786, h: 106.678920 }),
        ("12", Oklch { l: 0.243140, c: 0.007563, h:  95.372428 }),
      ]},
      RampData { name: "red", shades: vec![
        ("1", Oklch { l: 0.993357, c: 0.003193, h:  17.211771 }),
        ("2", Oklch { l: 0.982320, c: 0.008576, h:  17.302673 }),
        ("3", Oklch { l: 0.955471, c: 0.020718, h:  13.856728 }),
        ("4", Oklch { l: 0.921722, c: 0.040110, h:  16.004452 }),
        ("5", Oklch { l: 0.892041, c: 0.056745, h:  16.925737 }),
        ("6", Oklch { l: 0.856904, c: 0.074072, h:  17.676165 }),
        ("7", Oklch { l: 0.806987, c: 0.088791, h:  18.320108 }),
        ("8", Oklch { l: 0.744337, c: 0.113252, h:  18.752908 }),
        ("9", Oklch { l: 0.625565, c: 0.193340, h:  23.026067 }),
        ("10", Oklch { l: 0.599021, c: 0.194656, h:  24.035349 }),
        ("11", Oklch { l: 0.557003, c: 0.197430, h:  25.168149 }),
        ("12", Oklch { l: 0.338991, c: 0.108908, h:  16.600136 }),
      ]},
      RampData { name: "crimson", shades: vec![
        ("1", Oklch { l: 0.993635, c: 0.003436, h: 354.688160 }),
        ("2", Oklch { l: 0.982094, c: 0.007908, h: 357.793606 }),
        ("3", Oklch { l: 0.953612, c: 0.025570, h: 356.283295 }),
        ("4", Oklch { l: 0.925768, c: 0.040142, h: 356.408649 }),
        ("5", Oklch { l: 0.893388, c: 0.053015, h: 355.774283 }),
        ("6", Oklch { l: 0.854098, c: 0.065275, h: 355.162051 }),
        ("7", Oklch { l: 0.808691, c: 0.078032, h: 354.939860 }),
        ("8", Oklch { l: 0.749336, c: 0.100196, h: 354.021240 }),
        ("9", Oklch { l: 0.634053, c: 0.212961, h:   1.276194 }),
        ("10", Oklch { l: 0.607453, c: 0.210583, h:   2.226888 }),
        ("11", Oklch { l: 0.552180, c: 0.207290, h:   4.488155 }),
        ("12", Oklch { l: 0.340906, c: 0.112932, h: 356.939643 }),
      ]},
      RampData { name: "pink", shades: vec![
        ("1", Oklch { l: 0.993915, c: 0.004108, h: 337.348880 }),
        ("2", Oklch { l: 0.982655, c: 0.009096, h: 341.798435 }),
        ("3", Oklch { l: 0.954218, c: 0.027600, h: 342.253232 }),
        ("4", Oklch { l: 0.925504, c: 0.042122, h: 340.622471 }),
        ("5", Oklch { l: 0.892741, c: 0.055297, h: 340.388862 }),
        ("6", Oklch { l: 0.855768, c: 0.067113, h: 340.719205 }),
        ("7", Oklch { l: 0.809739, c: 0.082980, h: 341.920749 }),
        ("8", Oklch { l: 0.751304, c: 0.107138, h: 341.476643 }),
        ("9", Oklch { l: 0.616784, c: 0.207608, h: 346.003116 }),
        ("10", Oklch { l: 0.595526, c: 0.207414, h: 346.669533 }),
        ("11", Oklch { l: 0.557538, c: 0.206878, h: 347.317258 }),
        ("12", Oklch { l: 0.349770, c: 0.128914, h: 345.361964 }),
      ]},
      RampData { name: "purple", shades: vec![
        ("1", Oklch { l: 0.993150, c: 0.003361, h: 325.602186 }),
        ("2", Oklch { l: 0.981187, c: 0.010131, h: 311.179863 }),
        ("3", Oklch { l: 0.958846, c: 0.024876, h: 311.707216 }),
        ("4", Oklch { l: 0.933267, c: 0.038609, h: 312.654849 }),
        ("5", Oklch { l: 0.901159, c: 0.053356, h: 311.248873 }),
        ("6", Oklch { l: 0.859175, c: 0.071840, h: 311.051733 }),
        ("7", Oklch { l: 0.804274, c: 0.091758, h: 309.689264 }),
        ("8", Oklch { l: 0.733054, c: 0.122525, h: 307.968514 }),
        ("9", Oklch { l: 0.555623, c: 0.182910, h: 305.860120 }),
        ("10", Oklch { l: 0.524636, c: 0.175482, h: 305.393445 }),
        ("11", Oklch { l: 0.516833, c: 0.173320, h: 305.877067 }),
        ("12", Oklch { l: 0.322222, c: 0.110208, h: 303.839322 }),
      ]},
      RampData { name: "violet", shades: vec![
        ("1", Oklch { l: 0.992388, c: 0.002827, h: 308.429207 }),
        ("2", Oklch { l: 0.982640, c: 0.009468, h: 299.244539 }),
        ("3", Oklch { l: 0.962275, c: 0.019056, h: 299.070283 }),
        ("4", Oklch { l: 0.932472, c: 0.036951, h: 297.537215 }),
        ("5", Oklch { l: 0.903512, c: 0.052159, h: 294.985469 }),
        ("6", Oklch { l: 0.864181, c: 0.072076, h: 293.652078 }),
        ("7", Oklch { l: 0.806227, c: 0.090230, h: 293.589117 }),
        ("8", Oklch { l: 0.729729, c: 0.119289, h: 292.595373 }),
        ("9", Oklch { l: 0.541680, c: 0.179028, h: 288.033215 }),
        ("10", Oklch { l: 0.510882, c: 0.177459, h: 287.684106 }),
        ("11", Oklch { l: 0.507832, c: 0.158918, h: 288.637243 }),
        ("12", Oklch { l: 0.312809, c: 0.097486, h: 286.565417 }),
      ]},
      RampData { name: "indigo", shades: vec![
        ("1", Oklch { l: 0.994327, c: 0.001317, h: 286.376098 }),
        ("2", Oklch { l: 0.982307, c: 0.008252, h: 271.330221 }),
        ("3", Oklch { l: 0.960859, c: 0.016961, h: 267.791258 }),
        ("4", Oklch { l: 0.934611, c: 0.031039, h: 269.818671 }),
        ("5", Oklch { l: 0.901944, c: 0.047148, h: 269.615691 }),
        ("6", Oklch { l: 0.861955, c: 0.067527, h: 271.087728 }),
        ("7", Oklch { l: 0.806155, c: 0.087538, h: 271.413467 }),
        ("8", Oklch { l: 0.730853, c: 0.112333, h: 270.429026 }),
        ("9", Oklch { l: 0.543750, c: 0.191015, h: 267.005384 }),
        ("10", Oklch { l: 0.510646, c: 0.195374, h: 266.577912 }),
        ("11", Oklch { l: 0.509214, c: 0.172500, h: 267.165637 }),
        ("12", Oklch { l: 0.312637, c: 0.085821, h: 268.596400 }),
      ]},
      RampData { name: "blue", shades: vec![
        ("1", Oklch { l: 0.993098, c: 0.003405, h: 247.857129 }),
        ("2", Oklch { l: 0.982018, c: 0.009238, h: 242.834596 }),
        ("3", Oklch { l: 0.959677, c: 0.020061, h: 238.662591 }),
        ("4", Oklch { l: 0.938067, c: 0.034960, h: 234.801664 }),
        ("5", Oklch { l: 0.905075, c: 0.051296, h: 240.311400 }),
        ("6", Oklch { l: 0.863266, c: 0.068203, h: 243.315808 }),
        ("7", Oklch { l: 0.809760, c: 0.088674, h: 243.054217 }),
        ("8", Oklch { l: 0.733610, c: 0.121365, h: 243.089381 }),
        ("9", Oklch { l: 0.649294, c: 0.193040, h: 251.779885 }),
        ("10", Oklch { l: 0.622299, c: 0.183120, h: 251.703788 }),
        ("11", Oklch { l: 0.555750, c: 0.162220, h: 252.194704 }),
        ("12", Oklch { l: 0.323963, c: 0.096382, h: 258.816198 }),
      ]},
      RampData { name: "cyan", shades: vec![
        ("1", Oklch { l: 0.992066, c: 0.003455, h: 219.532045 }),
        ("2", Oklch { l: 0.979396, c: 0.008578, h: 205.895931 }),
        ("3", Oklch { l: 0.958571, c: 0.026264, h: 202.561788 }),
        ("4", Oklch { l: 0.932066, c: 0.040874, h: 205.981161 }),
        ("5", Oklch { l: 0.900376, c: 0.053943, h: 206.446632 }),
        ("6", Oklch { l: 0.857871, c: 0.065944, h: 208.135128 }),
        ("7", Oklch { l: 0.804487, c: 0.081618, h: 209.699392 }),
        ("8", Oklch { l: 0.727567, c: 0.110231, h: 211.932520 }),
        ("9", Oklch { l: 0.660042, c: 0.121716, h: 221.743805 }),
        ("10", Oklch { l: 0.626991, c: 0.114314, h: 221.503958 }),
        ("11", Oklch { l: 0.546966, c: 0.096642, h: 220.752178 }),
        ("12", Oklch { l: 0.331430, c: 0.052687, h: 218.828072 }),
      ]},
      RampData { name: "teal", shades: vec![
        ("1", Oklch { l: 0.993737, c: 0.004416, h: 179.738696 }),
        ("2", Oklch { l: 0.981540, c: 0.008834, h: 179.607892 }),
        ("3", Oklch { l: 0.960252, c: 0.025931, h: 181.864560 }),
        ("4", Oklch { l: 0.933987, c: 0.042097, h: 179.803111 }),
        ("5", Oklch { l: 0.899502, c: 0.053109, h: 181.469783 }),
        ("6", Oklch { l: 0.855785, c: 0.064287, h: 181.173403 }),
        ("7", Oklch { l: 0.796358, c: 0.076033, h: 182.969180 }),
        ("8", Oklch { l: 0.721436, c: 0.097356, h: 183.284822 }),
        ("9", Oklch { l: 0.649077, c: 0.113572, h: 181.962518 }),
        ("10", Oklch { l: 0.619317, c: 0.109418, h: 181.299258 }),
        ("11", Oklch { l: 0.552073, c: 0.101007, h: 178.794216 }),
        ("12", Oklch { l: 0.327205, c: 0.050676, h: 184.991436 }),
      ]},
      RampData { name: "green", shades: vec![
        ("1", Oklch { l: 0.994208, c: 0.004101, h: 157.180674 }),
        ("2", Oklch { l: 0.981448, c: 0.009876, h: 155.100541 }),
        ("3", Oklch { l: 0.958247, c: 0.022274, h: 155.924948 }),
        ("4", Oklch { l: 0.933533, c: 0.037183, h: 156.429115 }),
        ("5", Oklch { l: 0.898801, c: 0.048942, h: 157.248527 }),
        ("6", Oklch { l: 0.855821, c: 0.064055, h: 158.204257 }),
        ("7", Oklch { l: 0.798152, c: 0.083165, h: 159.149465 }),
        ("8", Oklch { l: 0.715586, c: 0.113306, h: 160.275403 }),
        ("9", Oklch { l: 0.640597, c: 0.132875, h: 157.679523 }),
        ("10", Oklch { l: 0.611472, c: 0.126639, h: 158.228413 }),
        ("11", Oklch { l: 0.543464, c: 0.111597, h: 159.497295 }),
        ("12", Oklch { l: 0.321984, c: 0.047502, h: 164.534018 }),
      ]},
      RampData { name: "orange", shades: vec![
        ("1", Oklch { l: 0.992315, c: 0.002517, h:  48.720123 }),
        ("2", Oklch { l: 0.979622, c: 0.015772, h:  73.684078 }),
        ("3", Oklch { l: 0.958319, c: 0.037122, h:  79.112497 }),
        ("4", Oklch { l: 0.919963, c: 0.065096, h:  74.369480 }),
        ("5", Oklch { l: 0.887886, c: 0.087505, h:  71.311661 }),
        ("6", Oklch { l: 0.853723, c: 0.106825, h:  66.017513 }),
        ("7", Oklch { l: 0.805855, c: 0.112326, h:  59.961636 }),
        ("8", Oklch { l: 0.744999, c: 0.132225, h:  54.684476 }),
        ("9", Oklch { l: 0.690796, c: 0.190911, h:  45.015134 }),
        ("10", Oklch { l: 0.662359, c: 0.194559, h:  43.458203 }),
        ("11", Oklch { l: 0.585488, c: 0.174261, h:  42.735691 }),
        ("12", Oklch { l: 0.349931, c: 0.068509, h:  40.828778 }),
      ]},
      RampData { name: "amber", shades: vec![
        ("1", Oklch { l: 0.994254, c: 0.002849, h:  84.558755 }),
        ("2", Oklch { l: 0.985594, c: 0.023785, h:  99.095682 }),
        ("3", Oklch { l: 0.969544, c: 0.068416, h: 100.387944 }),
        ("4", Oklch { l: 0.944669, c: 0.103438, h:  97.908755 }),
        ("5", Oklch { l: 0.917991, c: 0.132638, h:  98.230792 }),
        ("6", Oklch { l: 0.880406, c: 0.123266, h:  93.391929 }),
        ("7", Oklch { l: 0.827268, c: 0.122427, h:  86.694774 }),
        ("8", Oklch { l: 0.757680, c: 0.140278, h:  76.719832 }),
        ("9", Oklch { l: 0.853697, c: 0.157207, h:  84.129978 }),
        ("10", Oklch { l: 0.831295, c: 0.167916, h:  80.847440 }),
        ("11", Oklch { l: 0.570648, c: 0.129137, h:  63.937911 }),
        ("12", Oklch { l: 0.352189, c: 0.048633, h:  54.168613 }),
      ]},
      RampData { name: "yellow", shades: vec![
        ("1", Oklch { l: 0.992945, c: 0.005259, h: 106.494879 }),
        ("2", Oklch { l: 0.987551, c: 0.024942, h: 101.948269 }),
        ("3", Oklch { l: 0.973526, c: 0.083776, h: 104.197689 }),
        ("4", Oklch { l: 0.953400, c: 0.116915, h: 102.055180 }),
        ("5", Oklch { l: 0.924677, c: 0.140961, h:  98.073203 }),
        ("6", Oklch { l: 0.881083, c: 0.133975, h:  95.338385 }),
        ("7", Oklch { l: 0.835081, c: 0.120409, h:  92.843623 }),
        ("8", Oklch { l: 0.765655, c: 0.137163, h:  89.744582 }),
        ("9", Oklch { l: 0.917579, c: 0.183771, h: 100.936123 }),
        ("10", Oklch { l: 0.896699, c: 0.185062, h:  97.444993 }),
        ("11", Oklch { l: 0.569122, c: 0.119157, h:  76.809927 }),
        ("12", Oklch { l: 0.357818, c: 0.046057, h:  86.879683 }),
      ]},
    ]
  };
}
